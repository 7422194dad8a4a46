//! Fatal configuration errors
//!
//! Every variant aborts startup: the binary prints the message and exits with
//! a failure status before the terminal is put into raw mode.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be opened
    #[error("Cannot locate config file at '{}'", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-blank, non-comment line without a `=` separator
    #[error("Invalid configuration at line {line_number}:\n '{line}'")]
    MalformedLine { line_number: usize, line: String },

    /// Neither XDG_CONFIG_HOME nor a home directory is available
    #[error("Cannot determine config directory: neither XDG_CONFIG_HOME nor HOME is set")]
    NoConfigHome,

    /// Read failure after the file was opened
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),
}
