//! Control sequences missing from crossterm
//!
//! Both implement [`crossterm::Command`] so they can be queued through
//! [`GraphicsMode::run_control_sequence`](super::GraphicsMode::run_control_sequence)
//! like the built-in cursor commands.

use crossterm::Command;
use std::fmt;

/// Full terminal reset (RIS, `ESC c`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetScreen;

impl Command for ResetScreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1bc")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Designate the DEC special graphics set as G1 (`ESC ) 0`)
///
/// After this, Shift Out selects line-drawing glyphs on any VT100 compatible
/// terminal, not only those whose G1 defaults to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignateLineDrawing;

impl Command for DesignateLineDrawing {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b)0")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Ok(())
    }
}
