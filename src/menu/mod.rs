//! Selection menu
//!
//! - [`layout`]: box geometry computed once from the option list
//! - [`app`]: the [`Menu`] controller, key loop and incremental redraws
//! - [`launcher`]: the seam through which the chosen command is run

pub mod app;
pub mod launcher;
pub mod layout;

pub use app::{Menu, MenuState};
pub use launcher::{format_launch_command, Launcher, ShellLauncher, DEFAULT_LAUNCHER};
pub use layout::Layout;

/// One selectable entry: a config key and the command it launches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub command: String,
}
