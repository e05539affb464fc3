//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the board cursor based on arrow keys.
///
/// The cursor is a cell index in 0..=8 on the row-major 3×3 grid.
/// Movement clamps at the board edges; any other key leaves the cursor
/// where it is.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let row = cursor / 3;
    let col = cursor % 3;
    match key {
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Right if col < 2 => cursor + 1,
        KeyCode::Up if row > 0 => cursor - 3,
        KeyCode::Down if row < 2 => cursor + 3,
        _ => cursor,
    }
}
