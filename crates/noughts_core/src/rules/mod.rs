//! Game rules: win and draw detection over the board.
//!
//! Rules are pure functions separated from board storage so the session
//! state machine and the move selector can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, detect_win, winner};
