//! Streaming `key = value` reader
//!
//! [`ConfigReader`] hands out one [`ConfigEntry`] per logical line:
//! - blank lines (whitespace only) and lines starting with `#` are skipped
//! - the first `=` splits the line; the value may contain further `=`
//! - the key loses trailing spaces, the value loses leading spaces
//!
//! A surfaced line without `=` is fatal. Once end-of-input or an error is
//! reached the underlying source is dropped and the reader stays exhausted.

use super::errors::ConfigError;
use std::io::BufRead;

/// One parsed line of the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

/// Reader over an open config source
pub struct ConfigReader<R> {
    source: Option<R>,
    line_number: usize,
}

impl<R: BufRead> ConfigReader<R> {
    pub fn new(source: R) -> Self {
        ConfigReader {
            source: Some(source),
            line_number: 0,
        }
    }

    /// Whether the source has been released (end-of-input or fatal error)
    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }

    /// Produce the next entry, `Ok(None)` at end-of-input.
    pub fn next_entry(&mut self) -> Result<Option<ConfigEntry>, ConfigError> {
        let mut line = String::new();

        loop {
            line.clear();
            let read = match self.source.as_mut() {
                Some(source) => source.read_line(&mut line),
                None => return Ok(None),
            };

            match read {
                Ok(0) => {
                    self.source = None;
                    return Ok(None);
                }
                Ok(_) => self.line_number += 1,
                Err(err) => {
                    self.source = None;
                    return Err(err.into());
                }
            }

            let text = strip_line_ending(&line);
            if is_skipped(text) {
                continue;
            }

            let entry = parse_line(text, self.line_number);
            if entry.is_err() {
                self.source = None;
            }
            return entry.map(Some);
        }
    }
}

impl<R: BufRead> Iterator for ConfigReader<R> {
    type Item = Result<ConfigEntry, ConfigError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().transpose()
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn is_skipped(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}

/// Split a surfaced line on its first `=`.
pub fn parse_line(line: &str, line_number: usize) -> Result<ConfigEntry, ConfigError> {
    let Some((raw_key, raw_value)) = line.split_once('=') else {
        return Err(ConfigError::MalformedLine {
            line_number,
            line: line.to_string(),
        });
    };

    Ok(ConfigEntry {
        key: raw_key.trim_end_matches(' ').to_string(),
        value: raw_value.trim_start_matches(' ').to_string(),
    })
}
