//! Terminal mode for the interactive session

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, warn};
use std::io;

/// Keeps the terminal in raw mode until dropped
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        debug!("Raw mode enabled");
        Ok(RawModeGuard { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!("Failed to restore terminal mode: {}", err);
        }
    }
}
