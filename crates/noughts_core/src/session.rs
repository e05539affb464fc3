//! Per-game session state: configuration, turn phases, and move
//! application.
//!
//! A [`GameSession`] owns one game from the first move to a win, draw,
//! or reset. It never schedules anything itself: in single-player games
//! it parks in [`Phase::AiThinking`] after the human's move and waits
//! for the embedding app to deliver [`GameSession::ai_reply`] once the
//! thinking delay has elapsed.

use crate::ai::{self, Difficulty};
use crate::rules;
use crate::types::{Board, Mark, MoveError};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The mark the computer plays in single-player games. The human is
/// always X and therefore always opens.
pub const AI_MARK: Mark = Mark::O;

/// Whether one or two humans are playing.
///
/// Defaults to [`GameMode::Single`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum GameMode {
    /// One human (X) against the computer (O).
    #[default]
    Single,
    /// Two humans sharing the keyboard.
    Multiplayer,
}

impl GameMode {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "Single Player",
            Self::Multiplayer => "Multiplayer",
        }
    }
}

/// Per-game configuration, fixed once the game starts.
///
/// Changing mode or difficulty mid-game is not supported; the session
/// must be replaced to pick up new settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who the second player is.
    mode: GameMode,
    /// How strongly the computer plays (ignored in multiplayer).
    difficulty: Difficulty,
}

impl GameConfig {
    /// Creates a configuration from the chosen mode and difficulty.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self { mode, difficulty }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Somebody completed a line.
    Won(rules::WinResult),
    /// The board filled with no line completed.
    Draw,
}

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the given mark's move.
    Turn(Mark),
    /// The computer's reply is pending; all board input is rejected
    /// until it lands or the session is reset.
    AiThinking,
    /// The game ended; only a reset leaves this phase.
    Over(Outcome),
}

/// One applied move, as recorded in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlacedMove {
    /// The mark that was placed.
    mark: Mark,
    /// The cell it was placed on.
    cell: usize,
}

/// A single game from first move to win, draw, or reset.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// The mode and difficulty this game was started with.
    config: GameConfig,
    /// Current board contents.
    board: Board,
    /// Current phase of play.
    phase: Phase,
    /// Every applied move, in order.
    history: Vec<PlacedMove>,
    /// Bumped on every reset. A reply scheduled against an older
    /// generation is stale and must be dropped by the scheduler.
    generation: u64,
}

impl GameSession {
    /// Creates a fresh session; X always opens.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        info!(mode = config.mode().label(), difficulty = config.difficulty().label(), "new session");
        Self {
            config,
            board: Board::new(),
            phase: Phase::Turn(Mark::X),
            history: Vec::new(),
            generation: 0,
        }
    }

    /// The mark expected to move, when the session is waiting on one.
    pub fn to_move(&self) -> Option<Mark> {
        match self.phase {
            Phase::Turn(mark) => Some(mark),
            Phase::AiThinking | Phase::Over(_) => None,
        }
    }

    /// The final outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Over(outcome) => Some(outcome),
            Phase::Turn(_) | Phase::AiThinking => None,
        }
    }

    /// The winning mark, when somebody has won.
    pub fn winner(&self) -> Option<Mark> {
        match self.phase {
            Phase::Over(Outcome::Won(win)) => Some(*win.mark()),
            _ => None,
        }
    }

    /// Checks whether input is locked behind the computer's pending
    /// reply.
    pub fn is_locked(&self) -> bool {
        self.phase == Phase::AiThinking
    }

    /// Checks whether the session has reached a terminal phase.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// Applies the current player's move at `cell`.
    ///
    /// In single-player games a successful X move parks the session in
    /// [`Phase::AiThinking`]; the embedding app owns the thinking delay
    /// and calls [`GameSession::ai_reply`] when it elapses.
    ///
    /// # Errors
    ///
    /// Rejects the move, without changing any state, while the AI is
    /// thinking, once the game is over, and when `cell` is occupied or
    /// out of bounds.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: usize) -> Result<(), MoveError> {
        let mark = match self.phase {
            Phase::Turn(mark) => mark,
            Phase::AiThinking => return Err(MoveError::InputLocked),
            Phase::Over(_) => return Err(MoveError::GameOver),
        };
        self.apply(mark, cell)
    }

    /// Plays the computer's pending reply and returns the chosen cell.
    ///
    /// Does nothing and returns `None` unless the session is in
    /// [`Phase::AiThinking`]: a reply that was scheduled before a reset
    /// (or that races a finished game) lands here and is dropped.
    #[instrument(skip(self, rng), fields(generation = self.generation))]
    pub fn ai_reply(&mut self, rng: &mut impl Rng) -> Option<usize> {
        if self.phase != Phase::AiThinking {
            debug!(phase = ?self.phase, "dropping reply outside thinking phase");
            return None;
        }
        // AiThinking is only entered while an empty cell remains, so
        // selection cannot come back empty.
        let cell = ai::select_move(&self.board, AI_MARK, *self.config.difficulty(), rng)?;
        match self.apply(AI_MARK, cell) {
            Ok(()) => Some(cell),
            Err(error) => {
                warn!(%error, cell, "selector returned an unplayable cell");
                None
            }
        }
    }

    /// Clears the board and history and returns the session to X's
    /// turn.
    ///
    /// Bumps the generation; a reply the app scheduled before the reset
    /// carries the old generation and must not be delivered.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.phase = Phase::Turn(Mark::X);
        self.generation += 1;
        info!(generation = self.generation, "session reset");
    }

    /// Places `mark`, records it, and advances the phase.
    fn apply(&mut self, mark: Mark, cell: usize) -> Result<(), MoveError> {
        self.board.place(cell, mark)?;
        self.history.push(PlacedMove { mark, cell });
        info!(%mark, cell, "placed");
        if let Some(win) = rules::detect_win(&self.board, cell) {
            info!(winner = %win.mark(), line = ?win.line(), "line completed");
            self.phase = Phase::Over(Outcome::Won(win));
        } else if rules::is_full(&self.board) {
            info!("board full with no line");
            self.phase = Phase::Over(Outcome::Draw);
        } else {
            self.phase = self.next_phase(mark);
        }
        self.check_invariants();
        Ok(())
    }

    /// The phase that follows a successful move by `just_moved`.
    fn next_phase(&self, just_moved: Mark) -> Phase {
        let next = just_moved.opponent();
        if *self.config.mode() == GameMode::Single && next == AI_MARK {
            Phase::AiThinking
        } else {
            Phase::Turn(next)
        }
    }

    /// Debug-asserts the session invariants after a state change.
    fn check_invariants(&self) {
        use crate::invariants::{AlternatingMarks, Invariant, MonotonicFill};
        debug_assert!(MonotonicFill::holds(self), "{}", MonotonicFill::description());
        debug_assert!(
            AlternatingMarks::holds(self),
            "{}",
            AlternatingMarks::description()
        );
    }
}
