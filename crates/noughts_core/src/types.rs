//! Core domain types: marks, cells, and the board.

use serde::{Deserialize, Serialize};

/// One of the two symbols a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark (always moves first).
    X,
    /// The O mark (moves second; the AI side in single-player games).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark has been placed here.
    Empty,
    /// A mark has been placed here. Marked cells stay marked until the
    /// whole board is reset.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// Why a move was rejected.
///
/// A rejected move never changes any state; rapid double-submission of
/// the same cell simply yields [`MoveError::CellOccupied`] on the second
/// attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0..=8.
    #[display("Cell index {} is out of bounds (0-8)", _0)]
    OutOfBounds(usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Input is locked while the computer is thinking.
    #[display("Input is locked while the computer is thinking")]
    InputLocked,
}

impl std::error::Error for MoveError {}

/// 3×3 board stored as nine cells in row-major order.
///
/// Index 0..=8 maps to grid position row = index / 3, column = index % 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at `idx`, or `None` when out of bounds.
    pub fn get(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    /// Places `mark` at `idx`.
    ///
    /// # Errors
    ///
    /// Rejects out-of-bounds indices and occupied cells without touching
    /// the board. A cell, once marked, can only be cleared by replacing
    /// the whole board with a fresh one.
    pub fn place(&mut self, idx: usize, mark: Mark) -> Result<(), MoveError> {
        match self.get(idx) {
            None => Err(MoveError::OutOfBounds(idx)),
            Some(Cell::Marked(_)) => Err(MoveError::CellOccupied(idx)),
            Some(Cell::Empty) => {
                self.cells[idx] = Cell::Marked(mark);
                Ok(())
            }
        }
    }

    /// Checks whether the cell at `idx` is empty. Out-of-bounds indices
    /// count as non-empty.
    pub fn is_empty(&self, idx: usize) -> bool {
        matches!(self.get(idx), Some(Cell::Empty))
    }

    /// Iterates over the indices of all empty cells, in board order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(idx, _)| idx)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Formats the board as a 3×3 text grid; empty cells show their
    /// 1-based cell number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    Cell::Empty => write!(f, "{}", idx + 1)?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_fills_empty_cell() {
        let mut board = Board::new();
        assert!(board.place(4, Mark::X).is_ok());
        assert_eq!(board.get(4), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(board.place(4, Mark::O), Err(MoveError::CellOccupied(4)));
        // The original mark survives.
        assert_eq!(board.get(4), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn place_rejects_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Mark::X), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn empty_cells_tracks_placements() {
        let mut board = Board::new();
        assert_eq!(board.empty_cells().count(), 9);
        board.place(0, Mark::X).unwrap();
        board.place(8, Mark::O).unwrap();
        let empties: Vec<usize> = board.empty_cells().collect();
        assert_eq!(empties, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn full_board_has_no_empty_cells() {
        let mut board = Board::new();
        for idx in 0..9 {
            let mark = if idx % 2 == 0 { Mark::X } else { Mark::O };
            board.place(idx, mark).unwrap();
        }
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn display_shows_marks_and_cell_numbers() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
