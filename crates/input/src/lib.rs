//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into held game inputs and samples them into the
//! per-tick [`crate::types::TickInput`] the core consumes (including
//! terminals without key-release events).

pub mod held;
pub mod map;

pub use tui_simon_types as types;

pub use held::HeldInput;
pub use map::{is_quit_request, is_restart, should_quit, symbol_for_key};
