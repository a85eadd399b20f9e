//! Held-key tracking for terminal environments.
//!
//! The core samples "held" booleans once per tick, but many terminals never
//! emit key release events. A press therefore arms a short hold timer that
//! `update` decays; an explicit release (where the terminal supports it)
//! clears the slot immediately.

use crossterm::event::KeyEvent;

use crate::map::{is_quit_request, is_restart, symbol_for_key};
use crate::types::{Symbol, TickInput};

// Without release events, a single tap would otherwise read as held forever.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which game inputs currently count as held.
#[derive(Debug, Clone)]
pub struct HeldInput {
    /// Remaining hold time per symbol, indexed by `Symbol::index`.
    symbol_ms: [u32; 4],
    restart_ms: u32,
    quit_ms: u32,
    release_timeout_ms: u32,
}

impl HeldInput {
    pub fn new() -> Self {
        Self {
            symbol_ms: [0; 4],
            restart_ms: 0,
            quit_ms: 0,
            release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Arm the hold timer for whatever game input this key maps to.
    pub fn key_press(&mut self, key: KeyEvent) {
        if let Some(symbol) = symbol_for_key(key) {
            self.symbol_ms[symbol.index()] = self.release_timeout_ms;
        }
        if is_restart(key) {
            self.restart_ms = self.release_timeout_ms;
        }
        if is_quit_request(key) {
            self.quit_ms = self.release_timeout_ms;
        }
    }

    /// Clear the slot for a released key (terminals that report releases).
    pub fn key_release(&mut self, key: KeyEvent) {
        if let Some(symbol) = symbol_for_key(key) {
            self.symbol_ms[symbol.index()] = 0;
        }
        if is_restart(key) {
            self.restart_ms = 0;
        }
        if is_quit_request(key) {
            self.quit_ms = 0;
        }
    }

    /// Decay hold timers by the elapsed time.
    pub fn update(&mut self, elapsed_ms: u32) {
        for slot in self.symbol_ms.iter_mut() {
            *slot = slot.saturating_sub(elapsed_ms);
        }
        self.restart_ms = self.restart_ms.saturating_sub(elapsed_ms);
        self.quit_ms = self.quit_ms.saturating_sub(elapsed_ms);
    }

    /// Sample the held state as this tick's input.
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.symbol_ms[Symbol::Up.index()] > 0,
            left: self.symbol_ms[Symbol::Left.index()] > 0,
            right: self.symbol_ms[Symbol::Right.index()] > 0,
            down: self.symbol_ms[Symbol::Down.index()] > 0,
            restart: self.restart_ms > 0,
            quit: self.quit_ms > 0,
        }
    }
}

impl Default for HeldInput {
    fn default() -> Self {
        Self::new()
    }
}
