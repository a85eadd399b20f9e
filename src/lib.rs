//! Terminal Simon Says (workspace facade crate).
//!
//! This package keeps the `tui_simon::{core,input,term,types}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_simon_core as core;
pub use tui_simon_input as input;
pub use tui_simon_term as term;
pub use tui_simon_types as types;
