//! Win detection over the fixed set of three-in-a-row lines.

use crate::types::{Board, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight three-in-a-row lines, in evaluation order: rows top to
/// bottom, then columns left to right, then the two diagonals.
///
/// Detection scans this array front to back and reports the first
/// completed line, so a move that completes two lines at once is
/// always attributed to the earlier entry.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line together with the move that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct WinResult {
    /// Cell indices of the completed line.
    line: [usize; 3],
    /// The mark that owns the line.
    mark: Mark,
    /// The cell whose placement completed the line.
    completed_by: usize,
}

/// Returns the mark held by all three cells of `line`, if any.
fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Mark> {
    let mark = board.get(a)?.mark()?;
    (board.get(b)?.mark()? == mark && board.get(c)?.mark()? == mark).then_some(mark)
}

/// Checks if there is a winner on the board.
///
/// Returns the owning mark of the first completed line in [`LINES`]
/// order, `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Checks whether the placement at `placed` completed a line.
///
/// Callers run this immediately after each placement, so `placed` is
/// always the most recent move; it becomes the `completed_by` cell of
/// the result. Only lines through `placed` are considered, scanned in
/// [`LINES`] order.
#[instrument]
pub fn detect_win(board: &Board, placed: usize) -> Option<WinResult> {
    LINES
        .into_iter()
        .filter(|line| line.contains(&placed))
        .find_map(|line| {
            line_owner(board, line).map(|mark| WinResult {
                line,
                mark,
                completed_by: placed,
            })
        })
}
