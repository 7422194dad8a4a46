// TDM: terminal session launcher

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use tdm::config::{self, ConfigError, MenuConfig};
use tdm::menu::{Layout, Menu, ShellLauncher, DEFAULT_LAUNCHER};
use tdm::term::commands::{DesignateLineDrawing, ResetScreen};
use tdm::term::{GraphicsMode, InputDecoder, RawModeGuard};

#[derive(Parser, Debug)]
#[command(name = "tdm", version, about = "Pick a session from tdm.conf and launch it")]
struct Cli {
    /// Config file to read instead of $XDG_CONFIG_HOME/tdm.conf or ~/.config/tdm.conf
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Program the selected command is passed to
    #[arg(long, default_value = DEFAULT_LAUNCHER)]
    launcher: String,

    /// Title shown in the top border
    #[arg(long, default_value = "tdm")]
    title: String,

    /// Append logs to this file; logging is off without it
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    // Load everything before touching the terminal; config errors are fatal
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} option(s), padding {}x{}",
        config.options.len(),
        config.x_padding,
        config.y_padding
    );

    let size = crossterm::terminal::size().context("Failed to query terminal size")?;
    let layout = Layout::compute(&config.options, config.x_padding, config.y_padding, size);
    info!("Terminal {}x{}, layout {:?}", size.0, size.1, layout);

    let raw_mode = RawModeGuard::enable()?;

    let mut gfx = GraphicsMode::new(io::stdout().lock());
    gfx.run_control_sequence(ResetScreen)?;
    gfx.run_control_sequence(DesignateLineDrawing)?;

    let mut menu =
        Menu::new(config.options, layout, gfx, ShellLauncher).with_launch_prefix(cli.launcher);
    menu.draw(&cli.title)?;

    let mut input = InputDecoder::new(io::stdin().lock());
    let res = menu.run(&mut input);

    // Reset the screen whether or not the loop failed
    let mut gfx = menu.into_graphics();
    gfx.run_control_sequence(ResetScreen)?;
    gfx.flush()?;
    drop(raw_mode);

    let state = res?;
    info!("Exited with {:?}", state);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<MenuConfig, ConfigError> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    info!("Using config {}", path.display());
    MenuConfig::load(&path)
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}
