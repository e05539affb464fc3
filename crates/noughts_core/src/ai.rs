//! Move selection for the computer opponent.
//!
//! Selection is a pure function of the board plus a caller-supplied
//! random source, so games can be replayed deterministically from a
//! seeded generator.

use crate::rules::LINES;
use crate::types::{Board, Cell, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How strongly the computer opponent plays.
///
/// Defaults to [`Difficulty::Easy`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Difficulty {
    /// Picks a uniformly random empty cell.
    #[default]
    Easy,
    /// Completes its own line when it can, otherwise blocks the
    /// opponent's, otherwise picks a random empty cell.
    Hard,
}

impl Difficulty {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Hard => "Hard",
        }
    }

    /// Toggles between `Easy` and `Hard`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

/// Finds a move that completes a line for `mark`.
///
/// Scans [`LINES`] front to back for a line where `mark` holds two
/// cells and the third is empty, and returns that empty cell. The same
/// scan with the opponent's mark yields the blocking move.
#[instrument]
pub fn winning_move(board: &Board, mark: Mark) -> Option<usize> {
    LINES.into_iter().find_map(|line| {
        let mut open = None;
        let mut held = 0;
        for idx in line {
            match board.get(idx).and_then(Cell::mark) {
                Some(m) if m == mark => held += 1,
                // The opponent holds a cell; this line cannot be
                // completed.
                Some(_) => return None,
                None => open = Some(idx),
            }
        }
        if held == 2 { open } else { None }
    })
}

/// Picks a uniformly random empty cell, or `None` on a full board.
#[instrument(skip(rng))]
pub fn random_move(board: &Board, rng: &mut impl Rng) -> Option<usize> {
    let open: Vec<usize> = board.empty_cells().collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

/// Selects the computer's move for `mark` at the given difficulty.
///
/// [`Difficulty::Hard`] tries its own winning move first, then a block
/// of the opponent's winning move, then falls back to a random empty
/// cell. [`Difficulty::Easy`] always plays randomly. Returns `None`
/// only when the board has no empty cell left.
#[instrument(skip(rng))]
pub fn select_move(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Option<usize> {
    if difficulty == Difficulty::Hard {
        if let Some(idx) = winning_move(board, mark) {
            debug!(cell = idx, "completing own line");
            return Some(idx);
        }
        if let Some(idx) = winning_move(board, mark.opponent()) {
            debug!(cell = idx, "blocking opponent line");
            return Some(idx);
        }
    }
    let choice = random_move(board, rng);
    debug!(cell = ?choice, "random move");
    choice
}
