//! Menu controller: selection state, key handling and redraws

use super::launcher::{format_launch_command, Launcher, DEFAULT_LAUNCHER};
use super::layout::Layout;
use super::MenuOption;
use crate::term::{draw_box, GraphicsMode, Glyph, InputDecoder, Key, SpecialKey};
use crossterm::cursor::{Hide, Show};
use log::{debug, info, warn};
use std::io::{self, Read, Write};

/// Whether the key loop is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Idle,
    Exited,
}

pub struct Menu<W: Write, L: Launcher> {
    /// Options in config order
    options: Vec<MenuOption>,

    layout: Layout,

    /// Index of the highlighted option, always < options.len() when non-empty
    selected: usize,

    /// Output stream and its line-drawing state
    gfx: GraphicsMode<W>,

    launcher: L,

    /// Program the selected command is passed to
    launch_prefix: String,

    state: MenuState,
}

impl<W: Write, L: Launcher> Menu<W, L> {
    pub fn new(
        options: Vec<MenuOption>,
        layout: Layout,
        gfx: GraphicsMode<W>,
        launcher: L,
    ) -> Self {
        Menu {
            options,
            layout,
            selected: 0,
            gfx,
            launcher,
            launch_prefix: DEFAULT_LAUNCHER.to_string(),
            state: MenuState::Idle,
        }
    }

    pub fn with_launch_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.launch_prefix = prefix.into();
        self
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn graphics(&self) -> &GraphicsMode<W> {
        &self.gfx
    }

    pub fn into_graphics(self) -> GraphicsMode<W> {
        self.gfx
    }

    /// Initial render: border, every option row, then hide the cursor.
    pub fn draw(&mut self, title: &str) -> io::Result<()> {
        draw_box(&mut self.gfx, &self.layout.frame(), title)?;

        for index in 0..self.options.len() {
            self.draw_indicator(index, index == self.selected)?;
            // Back to normal so the label is not rendered as glyphs
            self.gfx.set_mode(false)?;
            let label = format!(" {}", self.options[index].label);
            self.gfx.write_text(&label)?;
        }

        self.gfx.run_control_sequence(Hide)?;
        self.gfx.flush()
    }

    /// Read keys until the user quits or input runs out.
    pub fn run<R: Read>(&mut self, input: &mut InputDecoder<R>) -> io::Result<MenuState> {
        while self.state == MenuState::Idle {
            match input.read_key()? {
                Some(key) => {
                    self.handle_key(key)?;
                }
                None => {
                    debug!("Input closed");
                    self.quit()?;
                }
            }
        }
        Ok(self.state)
    }

    /// Dispatch one key and return the resulting state.
    pub fn handle_key(&mut self, key: Key) -> io::Result<MenuState> {
        if self.state == MenuState::Exited {
            return Ok(self.state);
        }

        match key {
            Key::Literal(b'q') => self.quit()?,
            Key::Literal(b'\r') | Key::Literal(b'\n') => self.launch_selected()?,
            Key::Special(direction @ (SpecialKey::Up | SpecialKey::Down)) => {
                self.move_selection(direction)?
            }
            _ => {}
        }
        Ok(self.state)
    }

    /// Redraw only the old and new indicator cells.
    fn move_selection(&mut self, direction: SpecialKey) -> io::Result<()> {
        if self.options.is_empty() {
            return Ok(());
        }

        let previous = self.selected;
        self.selected = next_index(previous, self.options.len(), direction);
        debug!("Selection {} -> {}", previous, self.selected);

        self.draw_indicator(previous, false)?;
        self.draw_indicator(self.selected, true)?;
        self.gfx.set_mode(false)?;
        self.gfx.flush()
    }

    fn draw_indicator(&mut self, index: usize, selected: bool) -> io::Result<()> {
        let (x, y) = self.layout.option_cell(index);
        self.gfx.move_cursor_to(x, y)?;
        if selected {
            self.gfx.draw_glyph(Glyph::Diamond)
        } else {
            self.gfx.write_text(" ")
        }
    }

    fn launch_selected(&mut self) -> io::Result<()> {
        let Some(option) = self.options.get(self.selected) else {
            warn!("Enter pressed with no options configured");
            return Ok(());
        };
        let command = format_launch_command(&self.launch_prefix, &option.command);

        // The child shares the terminal
        self.gfx.set_mode(false)?;
        self.gfx.flush()?;

        if let Err(err) = self.launcher.launch(&command) {
            warn!("Failed to launch '{}': {}", command, err);
        }
        Ok(())
    }

    fn quit(&mut self) -> io::Result<()> {
        info!("Quitting menu");
        self.gfx.run_control_sequence(Show)?;
        self.gfx.set_mode(false)?;
        self.gfx.flush()?;
        self.state = MenuState::Exited;
        Ok(())
    }
}

/// Selection after pressing Up or Down, wrapping at both ends.
pub fn next_index(current: usize, count: usize, direction: SpecialKey) -> usize {
    if count == 0 {
        return 0;
    }
    match direction {
        SpecialKey::Up if current == 0 => count - 1,
        SpecialKey::Up => current - 1,
        SpecialKey::Down if current + 1 >= count => 0,
        SpecialKey::Down => current + 1,
        _ => current,
    }
}
