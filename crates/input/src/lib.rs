//! Input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events and typed text commands into
//! [`crate::types::Command`] values. Nothing here touches the engine; callers
//! decide what to do with a command.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, parse_command, should_quit};
