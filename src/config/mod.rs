//! Configuration file handling
//!
//! This module turns `tdm.conf` into a [`MenuConfig`]:
//! - [`reader`]: streaming `key = value` reader ([`ConfigReader`])
//! - [`settings`]: reserved layout keys and the ordered option list
//! - [`errors`]: the fatal error kinds ([`ConfigError`])
//!
//! # Location
//!
//! The file lives at `$XDG_CONFIG_HOME/tdm.conf` when that variable is set,
//! otherwise at `~/.config/tdm.conf`. See [`default_config_path`].

pub mod errors;
pub mod reader;
pub mod settings;

pub use errors::ConfigError;
pub use reader::{ConfigEntry, ConfigReader};
pub use settings::MenuConfig;

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// File name looked up inside the config directory
pub const CONFIG_FILE_NAME: &str = "tdm.conf";

/// Resolve the config path from the current environment.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().or_else(|| env::var_os("HOME").map(PathBuf::from));
    resolve_config_path(env::var_os("XDG_CONFIG_HOME"), home).ok_or(ConfigError::NoConfigHome)
}

/// Pick the config path given the XDG config home and the user's home directory.
///
/// An empty `XDG_CONFIG_HOME` counts as unset.
pub fn resolve_config_path(
    config_home: Option<OsString>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    match config_home.filter(|dir| !dir.is_empty()) {
        Some(dir) => Some(PathBuf::from(dir).join(CONFIG_FILE_NAME)),
        None => home.map(|home| home.join(".config").join(CONFIG_FILE_NAME)),
    }
}
