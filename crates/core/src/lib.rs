//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the sliding-tile merge rules: board storage, move
//! resolution, tile spawning and terminal-condition queries.
//! It has **no dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: the random source is injected, so the same seed produces identical games
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: `rows x cols` grid of tile exponents
//! - [`line`]: single-line compaction used by all four move directions
//! - [`grid`]: the engine tying board, RNG and score together
//! - [`rng`]: random empty-cell selection and 2/4 tile generation
//! - [`snapshot`]: renderer-facing copy of the engine state
//!
//! # Game Rules
//!
//! - **Move**: every row (or column) is compacted toward the move's edge; equal
//!   neighbours (ignoring gaps) merge once per move, the pair nearest the edge first
//! - **Spawn**: after a move that changed the board, a 2 (90%) or 4 (10%)
//!   appears on a random empty cell
//! - **Score**: every merge adds the value of the merged tile
//! - **Win**: a 2048 tile appears
//! - **Loss**: the board is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Grid;
//! use tui_2048_types::{Direction, GameStatus};
//!
//! // Create a 4x4 game with a fixed seed
//! let mut grid = Grid::seeded(4, 4, 12345);
//! assert_eq!(grid.board().empty_count(), 14);
//!
//! // Play one turn: move, then spawn if anything changed
//! let outcome = grid.step(Direction::Left);
//! if outcome.changed {
//!     assert!(outcome.spawned.is_some());
//! }
//!
//! assert_eq!(grid.status(), GameStatus::Playing);
//! ```

pub mod board;
pub mod grid;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use grid::{Grid, MoveOutcome};
pub use line::{compact_line, Line, LineOutcome};
pub use snapshot::GridSnapshot;
