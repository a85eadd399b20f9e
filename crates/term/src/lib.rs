//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay: the scene
//! is composed into a simple framebuffer of styled cells, then flushed to
//! the terminal backend in one repaint.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the scene composition pure so it can be unit-tested
//! - Keep the terminal escape handling in one place

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_simon_core as core;
pub use tui_simon_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
