//! Running the selected command
//!
//! The menu formats `<launcher> <command> 2>/dev/null` and hands the string
//! to a [`Launcher`]. [`ShellLauncher`] runs it through `sh -c` and blocks
//! until it finishes; the exit status is logged and otherwise ignored.

use log::info;
use std::io;
use std::process::Command;

/// Program the selected command is passed to
pub const DEFAULT_LAUNCHER: &str = "startx";

pub trait Launcher {
    /// Run `command` to completion.
    fn launch(&mut self, command: &str) -> io::Result<()>;
}

pub fn format_launch_command(launcher: &str, command: &str) -> String {
    format!("{} {} 2>/dev/null", launcher, command)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLauncher;

impl Launcher for ShellLauncher {
    fn launch(&mut self, command: &str) -> io::Result<()> {
        info!("Launching: {}", command);
        let status = Command::new("sh").arg("-c").arg(command).status()?;
        info!("Session exited with {}", status);
        Ok(())
    }
}
