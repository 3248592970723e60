//! Grid module - the game engine
//!
//! [`Grid`] owns the board, the random source used for spawning, the running
//! score and the highest exponent ever placed. It mutates the board only
//! through moves ([`Grid::slide`] and friends) and [`Grid::spawn`].
//! Terminal conditions are derived from the board on every query; nothing is cached.

use arrayvec::ArrayVec;
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::board::Board;
use crate::line::{compact_line, Line};
use crate::rng::{random_empty_position, seeded, spawn_exponent};
use crate::snapshot::GridSnapshot;
use crate::types::{tile_value, Direction, GameStatus, Position, INITIAL_TILES, WIN_VALUE};

/// What a single move did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether any tile slid or merged
    pub changed: bool,
    /// Number of merges performed
    pub merges: u32,
    /// Points added to the score by this move
    pub score_gained: u64,
    /// Where a new tile was placed, if [`Grid::step`] spawned one
    pub spawned: Option<Position>,
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct Grid<R = StdRng> {
    board: Board,
    rng: R,
    /// Highest exponent ever placed (spawned or merged).
    max_exponent: u8,
    score: u64,
}

impl Grid<StdRng> {
    /// Create a grid whose spawns are driven by a seeded [`StdRng`].
    pub fn seeded(rows: u8, cols: u8, seed: u64) -> Self {
        Self::new(rows, cols, seeded(seed))
    }
}

impl<R: Rng> Grid<R> {
    /// Create an empty `rows x cols` grid and spawn the two starting tiles.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: u8, cols: u8, rng: R) -> Self {
        let mut grid = Self {
            board: Board::new(rows, cols),
            rng,
            max_exponent: 0,
            score: 0,
        };
        let seeds = INITIAL_TILES.min(grid.board.rows() * grid.board.cols());
        for _ in 0..seeds {
            grid.spawn();
        }
        grid
    }

    /// Wrap an existing board without spawning anything.
    ///
    /// The score starts at zero and the max exponent is taken from the board.
    pub fn from_board(board: Board, rng: R) -> Self {
        let max_exponent = board.max_exponent();
        Self {
            board,
            rng,
            max_exponent,
            score: 0,
        }
    }

    pub fn rows_count(&self) -> usize {
        self.board.rows()
    }

    pub fn columns_count(&self) -> usize {
        self.board.cols()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn max_exponent(&self) -> u8 {
        self.max_exponent
    }

    /// Displayed value of the highest tile ever placed.
    pub fn max_value(&self) -> u64 {
        1u64 << self.max_exponent
    }

    /// Displayed value at (row, col), 0 for an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn value(&self, row: usize, col: usize) -> u64 {
        self.board.value(Position::new(row, col))
    }

    /// Place a new 2 or 4 on a random empty cell.
    ///
    /// Callers must only spawn while at least one cell is empty. On a full
    /// board this is a debug assertion; release builds return `None`.
    pub fn spawn(&mut self) -> Option<Position> {
        debug_assert!(!self.board.is_full(), "spawn called on a full board");
        let pos = random_empty_position(&self.board, &mut self.rng)?;
        let exponent = spawn_exponent(&mut self.rng);
        self.board.set(pos, exponent);
        self.max_exponent = self.max_exponent.max(exponent);
        debug!(
            "spawned {} at ({}, {})",
            tile_value(exponent),
            pos.row,
            pos.col
        );
        Some(pos)
    }

    /// Resolve a move without spawning.
    pub fn slide(&mut self, direction: Direction) -> MoveOutcome {
        let rows = self.board.rows();
        let cols = self.board.cols();
        let mut outcome = MoveOutcome::default();

        let cells = self.board.exponents_mut();
        for index in 0..Line::count(direction, rows, cols) {
            let line = compact_line(cells, Line::new(direction, index, rows, cols));
            outcome.changed |= line.changed;
            outcome.merges += line.merges;
            outcome.score_gained = outcome.score_gained.saturating_add(line.score);
            self.max_exponent = self.max_exponent.max(line.max_merged);
        }
        self.score = self.score.saturating_add(outcome.score_gained);

        debug!(
            "move {}: changed={} merges={} score+={}",
            direction.as_str(),
            outcome.changed,
            outcome.merges,
            outcome.score_gained
        );
        outcome
    }

    /// Resolve a move and report whether the board changed.
    ///
    /// A `false` result means the move was a no-op and no tile may be spawned.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        self.slide(direction).changed
    }

    /// One full turn: move, then spawn if the move changed the board and the
    /// game is not finished.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let mut outcome = self.slide(direction);
        if outcome.changed && !self.is_finished() {
            outcome.spawned = self.spawn();
        }
        outcome
    }

    /// Check whether a move in `direction` would change the board.
    pub fn can_move(&self, direction: Direction) -> bool {
        let rows = self.board.rows();
        let cols = self.board.cols();
        let mut scratch = self.board.exponents().to_vec();
        (0..Line::count(direction, rows, cols)).any(|index| {
            compact_line(&mut scratch, Line::new(direction, index, rows, cols)).changed
        })
    }

    /// Directions that would change the board, in [`Direction::ALL`] order.
    pub fn legal_moves(&self) -> ArrayVec<Direction, 4> {
        Direction::ALL
            .iter()
            .copied()
            .filter(|&d| self.can_move(d))
            .collect()
    }

    /// True when no move is possible: no empty cell and no equal neighbours.
    pub fn is_finished(&self) -> bool {
        self.board.is_full() && !self.board.has_adjacent_pair()
    }

    pub fn has_won(&self) -> bool {
        self.max_value() >= WIN_VALUE
    }

    /// Win takes precedence over a simultaneous loss.
    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.is_finished() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.exponents.clear();
        out.exponents.extend_from_slice(self.board.exponents());
        out.score = self.score;
        out.max_value = self.max_value();
        out.status = self.status();
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let mut s = GridSnapshot::empty(0, 0);
        self.snapshot_into(&mut s);
        s
    }
}
