//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The scene is a few dozen styled cells, so every frame is a full redraw;
//! there is no diffing layer.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Encode and flush one frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_full_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Encode a full-frame repaint into `buf`.
///
/// Style commands are only emitted when the style changes between adjacent
/// cells, which keeps the byte stream small for mostly-blank scenes.
pub fn encode_full_into(fb: &FrameBuffer, buf: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<CellStyle> = None;

    for y in 0..fb.height() {
        buf.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = match fb.get(x, y) {
                Some(cell) => cell,
                None => continue,
            };
            if current != Some(cell.style) {
                buf.queue(SetAttribute(if cell.style.bold {
                    Attribute::Bold
                } else {
                    Attribute::Reset
                }))?;
                buf.queue(SetForegroundColor(to_color(cell.style.fg)))?;
                buf.queue(SetBackgroundColor(to_color(cell.style.bg)))?;
                current = Some(cell.style);
            }
            buf.queue(Print(cell.ch))?;
        }
    }
    buf.queue(ResetColor)?;
    buf.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}
