//! # Introduction
//!
//! TDM reads a list of named commands from `tdm.conf`, draws them as a
//! bordered, centered menu straight onto the terminal with VT100 control
//! sequences and line-drawing glyphs, and launches the chosen entry when the
//! user presses Enter.
//!
//! ## Pipeline
//!
//! ```text
//! tdm.conf → ConfigReader → MenuConfig → Layout → draw_box → Menu loop → Launcher
//! ```
//!
//! 1. [`config`] — line-oriented `key = value` reader and the menu/layout
//!    settings built from it.
//! 2. [`term`] — the graphics-mode state machine that every byte of output
//!    goes through, the box renderer, and the raw key decoder.
//! 3. [`menu`] — option list, geometry, selection state and the key loop.
//!
//! ## Configuration format
//!
//! ```text
//! # comments and blank lines are ignored
//! padding = 1
//! play = firefox
//! work = alacritty
//! ```
//!
//! `padding`, `xpadding` and `ypadding` adjust the box; every other key is a
//! menu entry whose value is handed to the launcher.

pub mod config;
pub mod menu;
pub mod term;
