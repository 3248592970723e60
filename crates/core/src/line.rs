//! Line compaction - the move-resolution algorithm
//!
//! Every move is resolved line by line. A [`Line`] describes one row or column
//! as an arithmetic progression over the board's flat storage, already ordered
//! from the edge the move points at toward the far edge. The same
//! [`compact_line`] routine therefore serves all four directions.
//!
//! Within a line:
//! - the first empty cell met during the scan becomes the free slot
//! - a tile whose match candidate (next tile further along, skipping empties)
//!   has the same exponent merges with it into the free slot, or in place when
//!   no free slot exists yet
//! - tiles at [`MAX_EXPONENT`] never merge, so a merged value always fits a `u64`
//! - any other tile slides into the free slot if one is known
//! - after every slide or merge the free slot advances one step toward the far edge
//!
//! Merged tiles sit behind the scan position and are never examined again, so
//! a tile merges at most once per move.

use log::trace;

use crate::types::{tile_value, Direction, MAX_EXPONENT};

/// One row or column in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Flat index of the cell nearest the move's edge
    start: usize,
    /// Signed distance between consecutive cells in scan order
    stride: isize,
    /// Number of cells in the line
    len: usize,
}

impl Line {
    /// The `index`-th line perpendicular to `direction` on a `rows x cols` board.
    ///
    /// For vertical moves `index` is a column, for horizontal moves a row.
    pub fn new(direction: Direction, index: usize, rows: usize, cols: usize) -> Self {
        let cols_i = cols as isize;
        match direction {
            Direction::Up => Self {
                start: index,
                stride: cols_i,
                len: rows,
            },
            Direction::Down => Self {
                start: (rows - 1) * cols + index,
                stride: -cols_i,
                len: rows,
            },
            Direction::Left => Self {
                start: index * cols,
                stride: 1,
                len: cols,
            },
            Direction::Right => Self {
                start: index * cols + cols - 1,
                stride: -1,
                len: cols,
            },
        }
    }

    /// Number of lines a move in `direction` resolves.
    pub fn count(direction: Direction, rows: usize, cols: usize) -> usize {
        if direction.is_vertical() {
            cols
        } else {
            rows
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Flat index of the `step`-th cell in scan order.
    #[inline(always)]
    pub fn at(&self, step: usize) -> usize {
        (self.start as isize + self.stride * step as isize) as usize
    }
}

/// Result of compacting a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineOutcome {
    pub changed: bool,
    pub merges: u32,
    /// Sum of 2^(new exponent) over all merges.
    pub score: u64,
    /// Highest exponent created by a merge in this line (0 if none).
    pub max_merged: u8,
}

/// Compact one line of `cells` toward its start.
pub fn compact_line(cells: &mut [u8], line: Line) -> LineOutcome {
    let mut outcome = LineOutcome::default();
    let mut free_slot: Option<usize> = None;

    for step in 0..line.len() {
        let current = cells[line.at(step)];
        if current == 0 {
            if free_slot.is_none() {
                free_slot = Some(step);
            }
            continue;
        }

        let candidate = (step + 1..line.len()).find(|&s| cells[line.at(s)] != 0);

        match candidate {
            Some(next) if cells[line.at(next)] == current && current < MAX_EXPONENT => {
                let slot = free_slot.unwrap_or(step);
                let merged = current + 1;
                cells[line.at(step)] = 0;
                cells[line.at(next)] = 0;
                cells[line.at(slot)] = merged;
                free_slot = Some(slot + 1);

                trace!("merge exponent {} into step {}", merged, slot);
                outcome.changed = true;
                outcome.merges += 1;
                outcome.score = outcome.score.saturating_add(tile_value(merged));
                outcome.max_merged = outcome.max_merged.max(merged);
            }
            _ => {
                if let Some(slot) = free_slot {
                    cells[line.at(step)] = 0;
                    cells[line.at(slot)] = current;
                    free_slot = Some(slot + 1);
                    outcome.changed = true;
                }
            }
        }
    }

    outcome
}
