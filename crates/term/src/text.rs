//! Plain-text board rendering for line-oriented terminals.

use std::fmt::Write;

use crate::core::GridSnapshot;
use crate::types::{Position, TEXT_FIELD_WIDTH};

/// Render the board as rows of right-aligned numeric fields.
///
/// Every cell is a space, the value right-aligned in a
/// [`TEXT_FIELD_WIDTH`]-wide field (0 for empty cells), and a trailing space.
pub fn render_text(snap: &GridSnapshot) -> String {
    let mut out = String::with_capacity(snap.rows * (snap.cols * (TEXT_FIELD_WIDTH + 2) + 1));
    for row in 0..snap.rows {
        for col in 0..snap.cols {
            let value = snap.value(Position::new(row, col));
            // Writing into a String cannot fail.
            let _ = write!(out, " {:>width$} ", value, width = TEXT_FIELD_WIDTH);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::core::Grid;

    #[test]
    fn renders_right_aligned_fields() {
        let board = Board::from_values(&[vec![2, 0], vec![2048, 16]]).unwrap();
        let grid = Grid::from_board(board, crate::core::rng::seeded(1));
        let text = render_text(&grid.snapshot());
        assert_eq!(text, "     2      0 \n  2048     16 \n");
    }
}
