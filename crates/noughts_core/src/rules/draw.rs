//! Draw detection.

use super::win::winner;
use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Checks if the game has ended in a draw: a full board with no
/// completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
