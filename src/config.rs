//! Runtime configuration read from environment variables.
//!
//! - `G2048_ROWS` / `G2048_COLS`: board size (default 4x4, 2..=255)
//! - `G2048_SEED`: fixed u64 seed for reproducible games (default: entropy)
//! - `G2048_MODE`: `tui` for the raw-terminal UI (default) or `line` for the
//!   typed-command loop

use std::env;

use anyhow::{ensure, Result};
use log::warn;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS};

/// How the game talks to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Raw mode, alternate screen, arrow keys
    Tui,
    /// Cooked mode: print the board, read one command per token
    Line,
}

impl Mode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tui" => Some(Mode::Tui),
            "line" => Some(Mode::Line),
            _ => None,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    pub seed: Option<u64>,
    pub mode: Mode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            mode: Mode::Tui,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparseable values fall back to
    /// defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let rows = parse_or("G2048_ROWS", lookup("G2048_ROWS"), defaults.rows);
        let cols = parse_or("G2048_COLS", lookup("G2048_COLS"), defaults.cols);

        let seed = lookup("G2048_SEED").and_then(|s| match s.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!("ignoring invalid G2048_SEED={:?}", s);
                None
            }
        });

        let mode = match lookup("G2048_MODE") {
            Some(s) => Mode::from_str(&s).unwrap_or_else(|| {
                warn!("ignoring invalid G2048_MODE={:?}", s);
                defaults.mode
            }),
            None => defaults.mode,
        };

        Self {
            rows,
            cols,
            seed,
            mode,
        }
    }

    /// Reject boards too small to play on.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.rows >= 2 && self.cols >= 2,
            "board must be at least 2x2 (got {}x{})",
            self.rows,
            self.cols
        );
        Ok(())
    }
}

fn parse_or(key: &str, raw: Option<String>, default: u8) -> u8 {
    match raw {
        Some(s) => s.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {}={:?}, using {}", key, s, default);
            default
        }),
        None => default,
    }
}
