//! GameView: maps a core snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The scene mirrors the classic layout: four directional arrows around the
//! screen centre with the currently shown one lit, lives in the top-right
//! corner, and banner text for level changes and the fail screen.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{MoveState, Symbol};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const UP_ART: [&str; 3] = ["  /\\  ", " /  \\ ", "/____\\"];
const DOWN_ART: [&str; 3] = ["\\----/", " \\  / ", "  \\/  "];
const LEFT_ART: [&str; 4] = ["  /|", " / |", " \\ |", "  \\|"];
const RIGHT_ART: [&str; 4] = ["|\\  ", "| \\ ", "| / ", "|/  "];

const UP_COLOR: Rgb = Rgb::new(90, 130, 255);
const LEFT_COLOR: Rgb = Rgb::new(225, 85, 225);
const RIGHT_COLOR: Rgb = Rgb::new(235, 200, 70);
const DOWN_COLOR: Rgb = Rgb::new(200, 200, 200);

const BANNER_RED: Rgb = Rgb::new(230, 60, 60);
const BANNER_BLUE: Rgb = Rgb::new(90, 130, 255);
const BANNER_MAROON: Rgb = Rgb::new(190, 48, 55);

/// A lightweight terminal renderer for the game scene.
pub struct GameView {
    debug_overlay: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            debug_overlay: false,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the sequence/entered-history dump along the top edge.
    pub fn with_debug_overlay(mut self, on: bool) -> Self {
        self.debug_overlay = on;
        self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// `trace` is the entered-history the runner accumulates from the core's
    /// observer events; it is only drawn when the debug overlay is on.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        trace: &[Symbol],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let cx = viewport.width / 2;
        let cy = viewport.height / 2;

        for symbol in Symbol::ALL {
            self.draw_arrow(fb, cx, cy, symbol, snap.highlighted == Some(symbol));
        }

        self.draw_lives(fb, viewport, snap.lives);

        let banner_y = viewport.height / 7;
        if snap.move_state == MoveState::Miss {
            put_centered(fb, viewport, banner_y, "Level Down", CellStyle::fg(BANNER_RED).bold());
        }
        if snap.level_up {
            put_centered(fb, viewport, banner_y, "Level Up!", CellStyle::fg(BANNER_BLUE).bold());
        }
        if snap.move_state == MoveState::Fail {
            let fail_y = viewport.height / 6;
            put_centered(fb, viewport, fail_y, "You Failed", CellStyle::fg(BANNER_MAROON).bold());
            put_centered(
                fb,
                viewport,
                fail_y + 1,
                "Press R to Retry or Esc to Quit",
                CellStyle::default(),
            );
        }

        if self.debug_overlay {
            self.draw_overlay(fb, snap, trace);
        }
    }

    /// Allocating variant of [`render_into`](Self::render_into).
    pub fn render(&self, snap: &GameSnapshot, trace: &[Symbol], viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, trace, viewport, &mut fb);
        fb
    }

    fn draw_arrow(&self, fb: &mut FrameBuffer, cx: u16, cy: u16, symbol: Symbol, lit: bool) {
        let (art, color, x, y): (&[&str], Rgb, u16, u16) = match symbol {
            Symbol::Up => (&UP_ART, UP_COLOR, cx.saturating_sub(3), cy.saturating_sub(5)),
            Symbol::Down => (&DOWN_ART, DOWN_COLOR, cx.saturating_sub(3), cy + 3),
            Symbol::Left => (
                &LEFT_ART,
                LEFT_COLOR,
                cx.saturating_sub(10),
                cy.saturating_sub(2),
            ),
            Symbol::Right => (&RIGHT_ART, RIGHT_COLOR, cx + 6, cy.saturating_sub(2)),
        };

        let style = if lit {
            CellStyle::fg(Rgb::new(10, 10, 10)).on(color).bold()
        } else {
            CellStyle::fg(color)
        };

        for (row, line) in art.iter().enumerate() {
            fb.put_str(x, y + row as u16, line, style);
        }
    }

    fn draw_lives(&self, fb: &mut FrameBuffer, viewport: Viewport, lives: u8) {
        // Circles are laid out right to left.
        for i in 0..3u16 {
            let x = viewport.width.saturating_sub(3 + i * 3);
            let filled = (i as u8) < lives;
            let ch = if filled { '\u{25CF}' } else { '\u{25CB}' };
            fb.put_char(x, 1, ch, CellStyle::fg(BANNER_RED));
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, trace: &[Symbol]) {
        let mut line = String::from("sequence: ");
        for symbol in &snap.sequence {
            line.push_str(symbol.as_str());
            line.push(' ');
        }
        fb.put_str(1, 0, &line, CellStyle::default());

        let mut line = String::from("entered:  ");
        for symbol in trace {
            line.push_str(symbol.as_str());
            line.push(' ');
        }
        fb.put_str(1, 1, &line, CellStyle::default());
    }
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let x = viewport.width.saturating_sub(text.len() as u16) / 2;
    fb.put_str(x, y, text, style);
}
