//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders a [`core::GridSnapshot`] either into a styled framebuffer that
//! is flushed to a raw-mode terminal, or into plain text for line-oriented
//! sessions.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep view code pure so it can be tested without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_rows, encode_frame_into, TerminalRenderer};
pub use text::render_text;
