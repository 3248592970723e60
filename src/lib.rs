//! 2048 in the terminal (workspace facade crate).
//!
//! This package exposes `tui_2048::{core,input,term,types}` over the crates
//! under `crates/`, plus the pieces the binary glues together: environment
//! [`config`] and the line-oriented [`session`] loop.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod config;
pub mod session;
