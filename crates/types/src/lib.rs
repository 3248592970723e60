//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, command parsing).
//!
//! # Tile Encoding
//!
//! Cells store an **exponent** rather than the displayed value:
//!
//! | Exponent | Displayed |
//! |----------|-----------|
//! | 0 | empty |
//! | 1 | 2 |
//! | 2 | 4 |
//! | 11 | 2048 |
//!
//! A merge therefore only ever increments a single byte.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, DEFAULT_COLS, DEFAULT_ROWS, WIN_VALUE};
//!
//! // Parse a direction (case-insensitive)
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//!
//! // Directions are either horizontal or vertical
//! assert!(Direction::Up.is_vertical());
//!
//! assert_eq!((DEFAULT_ROWS, DEFAULT_COLS), (4, 4));
//! assert_eq!(WIN_VALUE, 2048);
//! ```

/// Default board height (4 rows)
pub const DEFAULT_ROWS: u8 = 4;

/// Default board width (4 columns)
pub const DEFAULT_COLS: u8 = 4;

/// Displayed tile value that wins the game.
pub const WIN_VALUE: u64 = 2048;

/// Exponent of [`WIN_VALUE`].
pub const WIN_EXPONENT: u8 = 11;

/// Largest exponent a tile can hold; 2^63 is the biggest power of two in a `u64`.
///
/// Two tiles at this exponent do not merge.
pub const MAX_EXPONENT: u8 = 63;

/// Number of tiles placed on a freshly constructed board.
pub const INITIAL_TILES: usize = 2;

/// Probability that a spawned tile is a 4 (exponent 2) instead of a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Width of one right-aligned numeric field in the plain text board.
pub const TEXT_FIELD_WIDTH: usize = 5;

/// Displayed value for an exponent (`0` stays empty).
///
/// # Examples
///
/// ```
/// use tui_2048_types::tile_value;
///
/// assert_eq!(tile_value(0), 0);
/// assert_eq!(tile_value(1), 2);
/// assert_eq!(tile_value(11), 2048);
/// assert_eq!(tile_value(64), u64::MAX);
/// ```
#[inline]
pub fn tile_value(exponent: u8) -> u64 {
    if exponent == 0 {
        0
    } else {
        1u64.checked_shl(u32::from(exponent)).unwrap_or(u64::MAX)
    }
}

/// Exponent for a displayed value, if it is a positive power of two (or 0).
pub fn tile_exponent(value: u64) -> Option<u8> {
    match value {
        0 => Some(0),
        1 => None,
        v if v.is_power_of_two() => Some(v.trailing_zeros() as u8),
        _ => None,
    }
}


/// Move directions
///
/// A move pushes every tile toward the named edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for moves that compact columns.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Commands produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide all tiles toward an edge
    Move(Direction),
    /// Leave the game
    Quit,
}

/// A (row, col) coordinate on the board.
///
/// Row 0 is the top edge, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Derived game status.
///
/// There is no stored state machine: the status is recomputed from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Moves remain and the winning tile has not been reached
    Playing,
    /// A tile reached [`WIN_VALUE`]
    Won,
    /// The board is full and no adjacent pair can merge
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}
