//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Full redraw per frame. The fall field repaints most of the screen every
//! tick anyway, so there is no diff engine here.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Tint};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<Tint> = None;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if current != Some(cell.tint) {
                    self.stdout.queue(SetForegroundColor(tint_color(cell.tint)))?;
                    current = Some(cell.tint);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            if y + 1 < fb.height() {
                self.stdout.queue(Print("\r\n"))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tint palette.
fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Default => Color::Rgb {
            r: 220,
            g: 220,
            b: 220,
        },
        Tint::Bar => Color::Rgb { r: 60, g: 160, b: 110 },
        Tint::Accent => Color::Rgb {
            r: 240,
            g: 240,
            b: 160,
        },
        Tint::Good => Color::Rgb { r: 90, g: 140, b: 255 },
        Tint::Bad => Color::Rgb { r: 230, g: 80, b: 80 },
        Tint::Dim => Color::Rgb {
            r: 110,
            g: 110,
            b: 120,
        },
    }
}
