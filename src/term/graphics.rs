//! Graphics-mode state machine
//!
//! While the line-drawing set is selected the terminal renders the ASCII
//! range as glyphs, including the bytes escape sequences are made of. The
//! [`GraphicsMode`] owns the output stream and the current mode so that:
//! - mode bytes are only emitted when the mode actually changes
//! - every control sequence is written in normal mode, then the previous
//!   mode is restored
//!
//! Coordinates passed to [`GraphicsMode::move_cursor_to`] are 1-based
//! terminal cells, column first.

use super::glyphs::{Glyph, SHIFT_IN, SHIFT_OUT};
use crossterm::cursor::MoveTo;
use crossterm::{Command, QueueableCommand};
use std::io::{self, Write};

pub struct GraphicsMode<W: Write> {
    out: W,
    line_drawing: bool,
}

impl<W: Write> GraphicsMode<W> {
    /// Wrap an output stream that is currently in normal mode.
    pub fn new(out: W) -> Self {
        GraphicsMode {
            out,
            line_drawing: false,
        }
    }

    pub fn is_line_drawing(&self) -> bool {
        self.line_drawing
    }

    /// Switch modes, returning the previous one.
    ///
    /// Emits nothing when `on` matches the current mode.
    pub fn set_mode(&mut self, on: bool) -> io::Result<bool> {
        let previous = self.line_drawing;
        if previous != on {
            self.out.write_all(&[if on { SHIFT_OUT } else { SHIFT_IN }])?;
            self.line_drawing = on;
        }
        Ok(previous)
    }

    pub fn draw_glyph(&mut self, glyph: Glyph) -> io::Result<()> {
        self.set_mode(true)?;
        self.out.write_all(&[glyph.code()])
    }

    /// Print text verbatim in normal mode.
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.set_mode(false)?;
        self.out.write_all(text.as_bytes())
    }

    /// Emit a control sequence in normal mode, then restore the prior mode.
    pub fn run_control_sequence(&mut self, command: impl Command) -> io::Result<()> {
        let previous = self.set_mode(false)?;
        self.out.queue(command)?;
        self.set_mode(previous)?;
        Ok(())
    }

    /// Absolute cursor move to column `x`, row `y` (1-based, clamped to the
    /// first cell).
    pub fn move_cursor_to(&mut self, x: i32, y: i32) -> io::Result<()> {
        self.run_control_sequence(MoveTo(to_cell_index(x), to_cell_index(y)))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn to_cell_index(coordinate: i32) -> u16 {
    u16::try_from(coordinate.max(1) - 1).unwrap_or(u16::MAX)
}
