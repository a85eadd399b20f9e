//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the full turn-taking rule set of the game with
//! **zero dependencies** on UI or I/O:
//!
//! - **Deterministic**: same seed produces the identical game
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: runs in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: the turn state machine, timers, lives, and scoring rules
//! - [`matcher`]: pure comparison of a player entry against the sequence
//! - [`rng`]: seedable generator with the anti-repetition draw policy
//! - [`snapshot`]: read-only per-tick view for rendering
//!
//! # Game Rules
//!
//! The machine replays a growing sequence of four directional symbols; the
//! player reproduces it. A full reproduction appends one symbol (level up).
//! A wrong entry sheds the newest symbol (never below one), costs one of
//! three lives, and replays; at zero lives the game is over until an
//! explicit restart.
//!
//! # Example
//!
//! ```
//! use tui_simon_core::GameState;
//! use tui_simon_types::TickInput;
//!
//! let mut game = GameState::new(12345);
//!
//! // Drive the machine one logical tick at a time.
//! let idle = TickInput::default();
//! let events = game.advance(&idle);
//! assert!(!events.quit);
//! ```
//!
//! # Timing
//!
//! The machine advances on a fixed 60 Hz logical tick supplied by the
//! caller; there is no internal clock. Call
//! [`GameState::advance`](game_state::GameState::advance) once per tick.

pub mod game_state;
pub mod matcher;
pub mod rng;
pub mod snapshot;

pub use tui_simon_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, TickEvents};
pub use matcher::{evaluate, Verdict};
pub use rng::{next_symbol, SimpleRng};
pub use snapshot::GameSnapshot;
