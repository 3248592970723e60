use crate::types::{tile_value, GameStatus, Position};

/// Read-only copy of everything a renderer needs from a [`crate::Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Exponents in row-major order (0 = empty)
    pub exponents: Vec<u8>,
    pub score: u64,
    pub max_value: u64,
    pub status: GameStatus,
}

impl GridSnapshot {
    /// An empty snapshot of the given size (no tiles, zero score).
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            exponents: vec![0; rows * cols],
            score: 0,
            max_value: 0,
            status: GameStatus::Playing,
        }
    }

    pub fn exponent(&self, pos: Position) -> u8 {
        self.exponents[pos.row * self.cols + pos.col]
    }

    /// Displayed value at a position (0 = empty).
    pub fn value(&self, pos: Position) -> u64 {
        tile_value(self.exponent(pos))
    }

    pub fn set_exponent(&mut self, pos: Position, exponent: u8) {
        self.exponents[pos.row * self.cols + pos.col] = exponent;
    }

    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }
}
