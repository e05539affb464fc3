//! Pure tic-tac-toe game logic.
//!
//! This crate knows nothing about terminals, timers, or input devices. It
//! provides:
//!
//! - **Board model**: a 3×3 grid of [`Cell`]s addressed by index 0–8
//!   (row = index / 3, column = index % 3).
//! - **Rules**: win detection over the eight fixed lines, and draw
//!   detection for a full board with no winner.
//! - **Move selection**: the AI opponent, which on [`Difficulty::Hard`]
//!   claims its own winning line, then blocks the opponent's, then falls
//!   back to a uniformly random empty cell.
//! - **Session**: [`GameSession`], the per-game turn controller. One
//!   session per running game; callers own the session and drive it with
//!   [`GameSession::play`] and [`GameSession::ai_reply`].
//!
//! The AI "thinking" delay is deliberately not modeled here — a session
//! locks itself ([`Phase::AiThinking`]) and the embedding application
//! decides when to deliver the reply. This keeps every state transition
//! synchronous and testable.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod invariants;
mod rules;
mod session;
mod types;

pub use ai::{Difficulty, random_move, select_move, winning_move};
pub use invariants::{AlternatingMarks, Invariant, MonotonicFill};
pub use rules::{LINES, WinResult, detect_win, is_draw, is_full, winner};
pub use session::{AI_MARK, GameConfig, GameMode, GameSession, Outcome, Phase, PlacedMove};
pub use types::{Board, Cell, Mark, MoveError};
