//! First-class invariants for the game session.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are debug-asserted after every applied move and are testable
//! independently as documentation of the session's guarantees.

use crate::session::{AI_MARK, GameMode, GameSession, Phase};
use crate::types::{Board, Mark};

/// A logical property that must hold for a given state.
///
/// Invariants express guarantees that should never be violated. They
/// are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: the board is exactly the replay of the recorded history.
///
/// Marks only accumulate. A marked cell never clears or changes until
/// the whole session resets, and every mark traces back to exactly one
/// recorded move.
pub struct MonotonicFill;

impl Invariant<GameSession> for MonotonicFill {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();
        for mv in session.history() {
            if replayed.place(*mv.cell(), *mv.mark()).is_err() {
                return false;
            }
        }
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "the board matches the replayed move history; marks never clear or change outside a reset"
    }
}

/// Invariant: recorded moves alternate X, O, X, O, ... with X first,
/// and the current phase agrees with the history parity.
pub struct AlternatingMarks;

impl Invariant<GameSession> for AlternatingMarks {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        if let Some(first) = history.first()
            && *first.mark() != Mark::X
        {
            return false;
        }
        for window in history.windows(2) {
            if window[0].mark() == window[1].mark() {
                return false;
            }
        }
        let expected = if history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        match session.phase() {
            Phase::Turn(mark) => *mark == expected,
            Phase::AiThinking => {
                expected == AI_MARK && *session.config().mode() == GameMode::Single
            }
            Phase::Over(_) => true,
        }
    }

    fn description() -> &'static str {
        "marks alternate starting with X, and the active phase matches the history parity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::session::GameConfig;

    fn session(mode: GameMode) -> GameSession {
        GameSession::new(GameConfig::new(mode, Difficulty::Easy))
    }

    #[test]
    fn test_fresh_session_holds_all() {
        let game = session(GameMode::Multiplayer);
        assert!(MonotonicFill::holds(&game));
        assert!(AlternatingMarks::holds(&game));
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut game = session(GameMode::Multiplayer);
        for cell in [4, 0, 8, 2] {
            game.play(cell).unwrap();
        }
        assert!(MonotonicFill::holds(&game));
        assert!(AlternatingMarks::holds(&game));
    }

    #[test]
    fn test_alternating_marks_holds_while_ai_thinks() {
        let mut game = session(GameMode::Single);
        game.play(4).unwrap();
        assert_eq!(*game.phase(), Phase::AiThinking);
        assert!(AlternatingMarks::holds(&game));
    }

    #[test]
    fn test_invariants_hold_after_reset() {
        let mut game = session(GameMode::Single);
        game.play(4).unwrap();
        game.reset();
        assert!(MonotonicFill::holds(&game));
        assert!(AlternatingMarks::holds(&game));
    }

    #[test]
    fn test_invariants_hold_through_a_finished_game() {
        let mut game = session(GameMode::Multiplayer);
        for cell in [0, 3, 1, 4, 2] {
            game.play(cell).unwrap();
        }
        assert!(game.is_over());
        assert!(MonotonicFill::holds(&game));
        assert!(AlternatingMarks::holds(&game));
    }
}
