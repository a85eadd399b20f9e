//! Read-only render snapshot of the game state.
//!
//! The front end reads one of these per tick instead of poking at live state.
//! `snapshot_into` reuses the destination's allocations so the render path
//! does not allocate per frame.

use crate::game_state::GameState;
use crate::types::{MoveState, Symbol, START_LIVES};

/// Observable state for rendering, captured once per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub move_state: MoveState,
    /// Symbol to highlight; `Some` only during `ShowPressed`.
    pub highlighted: Option<Symbol>,
    pub lives: u8,
    pub level_up: bool,
    pub players_turn: bool,
    /// Full sequence, exposed for the debug overlay only.
    pub sequence: Vec<Symbol>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            move_state: MoveState::Begin,
            highlighted: None,
            lives: START_LIVES,
            level_up: false,
            players_turn: false,
            sequence: Vec::new(),
        }
    }
}

impl GameState {
    /// Capture the current observable state into `out`.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.move_state = self.move_state();
        out.highlighted = self.highlighted();
        out.lives = self.lives();
        out.level_up = self.level_up();
        out.players_turn = self.players_turn();
        out.sequence.clear();
        out.sequence.extend_from_slice(self.sequence());
    }

    /// Convenience allocating variant of [`snapshot_into`](Self::snapshot_into).
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
