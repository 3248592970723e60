//! Board module - manages the tile grid
//!
//! The board is a `rows x cols` grid where each cell holds a tile exponent
//! (0 = empty, e = tile 2^e). Uses a flat vector in row-major order for cache
//! locality; a line (row or column) is then an arithmetic progression of
//! indices, see [`crate::line::Line`].
//! Coordinates: (row, col) where row 0 is the top edge and col 0 the left edge.

use crate::types::{tile_exponent, tile_value, Position, MAX_EXPONENT};

/// The game board - `rows x cols` exponents using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat vector of exponents, row-major order (row * cols + col)
    cells: Vec<u8>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: u8, cols: u8) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "board dimensions must be non-zero (got {rows}x{cols})"
        );
        let (rows, cols) = (rows as usize, cols as usize);
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Build a board from raw exponents in row-major order.
    ///
    /// Returns `None` if the length does not match the dimensions or an
    /// exponent exceeds [`MAX_EXPONENT`].
    pub fn from_exponents(rows: u8, cols: u8, exponents: Vec<u8>) -> Option<Self> {
        if rows == 0 || cols == 0 || exponents.len() != rows as usize * cols as usize {
            return None;
        }
        if exponents.iter().any(|&e| e > MAX_EXPONENT) {
            return None;
        }
        Some(Self {
            rows: rows as usize,
            cols: cols as usize,
            cells: exponents,
        })
    }

    /// Build a board from displayed values, one inner vector per row.
    ///
    /// Returns `None` for ragged or empty input, dimensions above 255, or any
    /// value that is neither 0 nor a power of two >= 2.
    pub fn from_values(rows: &[Vec<u64>]) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.len() > u8::MAX as usize || cols > u8::MAX as usize {
            return None;
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return None;
            }
            for &value in row {
                cells.push(tile_exponent(value)?);
            }
        }
        Some(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Calculate flat index from a position
    #[inline(always)]
    pub(crate) fn index(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "position ({}, {}) out of bounds for {}x{} board",
            pos.row,
            pos.col,
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Exponent at a position (0 = empty).
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[self.index(pos)]
    }

    /// Set the exponent at a position.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` exceeds [`MAX_EXPONENT`] or `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, exponent: u8) {
        assert!(
            exponent <= MAX_EXPONENT,
            "exponent {exponent} exceeds {MAX_EXPONENT}"
        );
        let idx = self.index(pos);
        self.cells[idx] = exponent;
    }

    /// Displayed value at a position (0 = empty).
    pub fn value(&self, pos: Position) -> u64 {
        tile_value(self.get(pos))
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == 0
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&e| e == 0).count()
    }

    /// Check if every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&e| e != 0)
    }

    /// Highest exponent currently on the board.
    pub fn max_exponent(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if any two horizontally or vertically adjacent tiles are equal
    /// and can still merge.
    ///
    /// Empty cells and tiles at [`MAX_EXPONENT`] are ignored.
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let e = self.cells[row * self.cols + col];
                if e == 0 || e >= MAX_EXPONENT {
                    continue;
                }
                if col + 1 < self.cols && self.cells[row * self.cols + col + 1] == e {
                    return true;
                }
                if row + 1 < self.rows && self.cells[(row + 1) * self.cols + col] == e {
                    return true;
                }
            }
        }
        false
    }

    /// Sum of displayed values over all cells, saturating at `u64::MAX`.
    pub fn total_value(&self) -> u64 {
        self.cells
            .iter()
            .fold(0u64, |sum, &e| sum.saturating_add(tile_value(e)))
    }

    /// Iterate over empty positions in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &e)| e == 0)
            .map(move |(i, _)| Position::new(i / cols, i % cols))
    }

    /// Get a reference to the internal exponents
    pub fn exponents(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn exponents_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Displayed values, one vector per row (for tests and display).
    pub fn to_values(&self) -> Vec<Vec<u64>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|&e| tile_value(e)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(3, 5);
        assert_eq!(board.index(Position::new(0, 0)), 0);
        assert_eq!(board.index(Position::new(0, 4)), 4);
        assert_eq!(board.index(Position::new(1, 0)), 5);
        assert_eq!(board.index(Position::new(2, 4)), 14);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_board_index_out_of_bounds_panics() {
        let board = Board::new(4, 4);
        board.get(Position::new(4, 0));
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_board_zero_dimension_panics() {
        let _ = Board::new(0, 4);
    }

    #[test]
    fn test_board_flat_storage() {
        let mut board = Board::new(4, 4);
        board.set(Position::new(0, 0), 1);
        board.set(Position::new(2, 3), 5);

        assert_eq!(board.cells[0], 1);
        assert_eq!(board.cells[2 * 4 + 3], 5);
        assert_eq!(board.value(Position::new(2, 3)), 32);
    }

    #[test]
    fn test_board_from_values_roundtrip() {
        let values = vec![vec![2, 0, 4], vec![0, 2048, 8]];
        let board = Board::from_values(&values).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.to_values(), values);
    }

    #[test]
    fn test_board_from_values_rejects_bad_input() {
        assert!(Board::from_values(&[]).is_none());
        assert!(Board::from_values(&[vec![2, 4], vec![2]]).is_none());
        assert!(Board::from_values(&[vec![3, 4]]).is_none());
        assert!(Board::from_values(&[vec![1, 4]]).is_none());
    }

    #[test]
    fn test_board_empty_positions_row_major() {
        let board = Board::from_values(&[vec![2, 0], vec![0, 4]]).unwrap();
        let empty: Vec<_> = board.empty_positions().collect();
        assert_eq!(empty, vec![Position::new(0, 1), Position::new(1, 0)]);
        assert_eq!(board.empty_count(), 2);
        assert!(!board.is_full());
    }

    #[test]
    fn test_board_adjacent_pairs() {
        let locked = Board::from_values(&[vec![2, 4], vec![4, 2]]).unwrap();
        assert!(!locked.has_adjacent_pair());

        let horizontal = Board::from_values(&[vec![2, 2], vec![4, 8]]).unwrap();
        assert!(horizontal.has_adjacent_pair());

        let vertical = Board::from_values(&[vec![2, 4], vec![8, 4]]).unwrap();
        assert!(vertical.has_adjacent_pair());

        // Empty cells never count as a pair.
        let empty = Board::new(2, 2);
        assert!(!empty.has_adjacent_pair());

        // Largest tiles cannot merge with each other.
        let largest = Board::from_values(&[vec![1 << 63, 1 << 63]]).unwrap();
        assert!(!largest.has_adjacent_pair());
        assert_eq!(largest.total_value(), u64::MAX);
    }
}
