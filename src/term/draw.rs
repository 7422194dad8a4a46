//! Titled box renderer
//!
//! The box is drawn in four passes: the top edge with its title, the right
//! side, the left side, then the bottom edge. Each side starts from one
//! absolute cursor move placed just past its top corner and then steps with
//! relative "down, left" motions, so each vertical glyph lands under the one
//! before it.
//!
//! ```text
//! ┌─title──┐   row y
//! │        │   rows y+1 ..= y+height
//! └────────┘   row y+height+1
//! ```

use super::glyphs::Glyph;
use super::graphics::GraphicsMode;
use crossterm::cursor::{MoveDown, MoveLeft};
use std::io::{self, Write};

/// Box placement before padding is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxFrame {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub x_padding: i32,
    pub y_padding: i32,
}

impl BoxFrame {
    /// Top-left corner after padding
    pub fn origin(&self) -> (i32, i32) {
        (
            self.x.saturating_sub(self.x_padding),
            self.y.saturating_sub(self.y_padding),
        )
    }

    /// Interior width after padding
    pub fn padded_width(&self) -> i32 {
        self.width.saturating_add(self.x_padding.saturating_mul(2))
    }

    /// Interior height after padding
    pub fn padded_height(&self) -> i32 {
        self.height.saturating_add(self.y_padding.saturating_mul(2))
    }
}

/// Draw `frame` with `title` embedded in the top edge.
///
/// The title is printed as-is; one longer than the width pushes the top-right
/// corner out of line with the sides.
pub fn draw_box<W: Write>(
    gfx: &mut GraphicsMode<W>,
    frame: &BoxFrame,
    title: &str,
) -> io::Result<()> {
    let (x, y) = frame.origin();
    let width = frame.padded_width();
    let height = frame.padded_height();
    let title_len = i32::try_from(title.chars().count()).unwrap_or(i32::MAX);

    gfx.move_cursor_to(x, y)?;
    gfx.draw_glyph(Glyph::TopLeft)?;
    gfx.draw_glyph(Glyph::Horizontal)?;
    gfx.write_text(title)?;
    for _ in 0..(width - 1).saturating_sub(title_len) {
        gfx.draw_glyph(Glyph::Horizontal)?;
    }
    gfx.draw_glyph(Glyph::TopRight)?;

    gfx.move_cursor_to(x.saturating_add(width).saturating_add(2), y)?;
    draw_side(gfx, height)?;

    gfx.move_cursor_to(x.saturating_add(1), y)?;
    draw_side(gfx, height)?;

    step_down(gfx)?;
    gfx.draw_glyph(Glyph::BottomLeft)?;
    for _ in 0..width {
        gfx.draw_glyph(Glyph::Horizontal)?;
    }
    gfx.draw_glyph(Glyph::BottomRight)
}

fn draw_side<W: Write>(gfx: &mut GraphicsMode<W>, height: i32) -> io::Result<()> {
    for _ in 0..height {
        step_down(gfx)?;
        gfx.draw_glyph(Glyph::Vertical)?;
    }
    Ok(())
}

/// Move to the cell below the last glyph drawn
fn step_down<W: Write>(gfx: &mut GraphicsMode<W>) -> io::Result<()> {
    gfx.run_control_sequence(MoveDown(1))?;
    gfx.run_control_sequence(MoveLeft(1))
}
