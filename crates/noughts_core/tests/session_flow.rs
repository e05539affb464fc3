//! End-to-end session flows: locking, AI replies, resets, and endings.

use noughts_core::{
    AlternatingMarks, Difficulty, GameConfig, GameMode, GameSession, Invariant, Mark,
    MonotonicFill, MoveError, Outcome, Phase, select_move,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn single(difficulty: Difficulty) -> GameSession {
    GameSession::new(GameConfig::new(GameMode::Single, difficulty))
}

fn multiplayer() -> GameSession {
    GameSession::new(GameConfig::new(GameMode::Multiplayer, Difficulty::Easy))
}

/// Plays a whole single-player game: the human takes the first empty
/// cell, the computer replies through the session. Returns the finished
/// session.
fn play_out(difficulty: Difficulty, seed: u64) -> GameSession {
    let mut session = single(difficulty);
    let mut rng = StdRng::seed_from_u64(seed);
    // A game can never run longer than nine placements.
    for _ in 0..9 {
        match *session.phase() {
            Phase::Turn(Mark::X) => {
                let cell = session
                    .board()
                    .empty_cells()
                    .next()
                    .expect("an open turn implies an empty cell");
                session.play(cell).unwrap();
            }
            Phase::Turn(Mark::O) => panic!("single-player O turns belong to the computer"),
            Phase::AiThinking => {
                session.ai_reply(&mut rng).expect("pending reply must land");
            }
            Phase::Over(_) => break,
        }
        assert!(MonotonicFill::holds(&session));
        assert!(AlternatingMarks::holds(&session));
    }
    session
}

#[test]
fn test_single_player_games_terminate_cleanly() {
    for seed in 0..32 {
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            let session = play_out(difficulty, seed);
            assert!(
                session.is_over(),
                "seed {seed} {difficulty:?} left an unfinished game"
            );
            assert!(session.history().len() <= 9);
        }
    }
}

#[test]
fn test_hard_reply_takes_own_win_over_block() {
    // X holds 0 and 1 (one off the top row), O holds 3 and 4 (one off
    // the middle row). The hard selector must finish its own row at 5
    // rather than block X at 2.
    let mut session = multiplayer();
    for cell in [0, 3, 1, 4] {
        session.play(cell).unwrap();
    }
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(
        select_move(session.board(), Mark::O, Difficulty::Hard, &mut rng),
        Some(5)
    );
}

#[test]
fn test_reset_during_thinking_cancels_the_reply() {
    let mut session = single(Difficulty::Hard);
    session.play(0).unwrap();
    assert_eq!(*session.phase(), Phase::AiThinking);
    let generation_before = *session.generation();

    // The player resets while the computer is still "thinking"; the
    // delayed reply then fires against the fresh session.
    session.reset();
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(session.ai_reply(&mut rng), None);

    assert_eq!(*session.generation(), generation_before + 1);
    assert_eq!(*session.phase(), Phase::Turn(Mark::X));
    assert_eq!(session.board().empty_cells().count(), 9);
    assert!(session.history().is_empty());
}

#[test]
fn test_locked_session_ignores_rapid_input() {
    let mut session = single(Difficulty::Easy);
    session.play(4).unwrap();
    for cell in [0, 1, 2, 3, 5, 6, 7, 8] {
        assert_eq!(session.play(cell), Err(MoveError::InputLocked));
    }
    assert_eq!(session.history().len(), 1);

    let mut rng = StdRng::seed_from_u64(7);
    session.ai_reply(&mut rng).unwrap();
    assert_eq!(session.to_move(), Some(Mark::X));
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_double_line_win_reports_the_row() {
    // X ends on 2, completing both the top row and the right column.
    // The row is scanned first and wins the attribution.
    let mut session = multiplayer();
    for cell in [0, 3, 1, 4, 5, 6, 8, 7, 2] {
        session.play(cell).unwrap();
    }
    let Some(Outcome::Won(win)) = session.outcome() else {
        panic!("expected a win, got {:?}", session.phase());
    };
    assert_eq!(*win.mark(), Mark::X);
    assert_eq!(*win.line(), [0, 1, 2]);
    assert_eq!(*win.completed_by(), 2);
}

#[test]
fn test_session_reusable_after_draw_and_reset() {
    let mut session = multiplayer();
    for cell in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
        session.play(cell).unwrap();
    }
    assert_eq!(session.outcome(), Some(Outcome::Draw));

    session.reset();
    for cell in [0, 3, 1, 4, 2] {
        session.play(cell).unwrap();
    }
    assert!(matches!(session.outcome(), Some(Outcome::Won(_))));
    assert_eq!(*session.generation(), 1);
}
