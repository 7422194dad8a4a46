//! Menu settings built from config entries
//!
//! Entries apply in file order, so the last write to a layout key wins.
//! `padding` sets both axes; `xpadding` and `ypadding` set one each. Every
//! other key becomes a [`MenuOption`], duplicates included.

use super::errors::ConfigError;
use super::reader::{ConfigEntry, ConfigReader};
use crate::menu::MenuOption;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    pub options: Vec<MenuOption>,
    pub x_padding: i32,
    pub y_padding: i32,
}

impl MenuConfig {
    /// Open `path` and read it to the end.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Reading config from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    /// Read every entry from an open source; the first error aborts.
    pub fn from_reader<R: BufRead>(source: R) -> Result<Self, ConfigError> {
        let mut config = MenuConfig::default();
        for entry in ConfigReader::new(source) {
            config.apply(entry?);
        }
        Ok(config)
    }

    pub fn apply(&mut self, entry: ConfigEntry) {
        match entry.key.as_str() {
            "padding" => {
                let padding = parse_padding(&entry.value);
                self.x_padding = padding;
                self.y_padding = padding;
            }
            "xpadding" => self.x_padding = parse_padding(&entry.value),
            "ypadding" => self.y_padding = parse_padding(&entry.value),
            _ => {
                debug!("Loaded option '{}' -> '{}'", entry.key, entry.value);
                self.options.push(MenuOption {
                    label: entry.key,
                    command: entry.value,
                });
            }
        }
    }
}

/// Largest padding kept; no terminal is wider or taller than this.
pub const MAX_PADDING: i32 = u16::MAX as i32;

/// Parse a padding value the way C's `atoi` reads it, clamped to
/// `0..=MAX_PADDING`.
///
/// Leading whitespace and an optional sign are accepted, parsing stops at the
/// first non-digit, and no digits at all yields 0.
pub fn parse_padding(value: &str) -> i32 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut parsed: i32 = 0;
    let mut consumed = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        parsed = parsed.saturating_mul(10).saturating_add(i32::from(byte - b'0'));
        consumed += 1;
    }

    if consumed == 0 || consumed != digits.trim_end().len() {
        warn!("Padding value '{}' is not a plain integer", value);
    }

    if negative {
        0
    } else if parsed > MAX_PADDING {
        warn!("Padding value '{}' clamped to {}", value, MAX_PADDING);
        MAX_PADDING
    } else {
        parsed
    }
}
