//! Menu geometry
//!
//! The box interior is the longest label plus [`Layout::MARGIN`] columns wide
//! and one row per option tall. The border adds one cell on every side, and
//! the origin (the top-left corner) centers the bordered box in the terminal.

use super::MenuOption;
use crate::term::BoxFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x_padding: i32,
    pub y_padding: i32,
    pub box_width: i32,
    pub box_height: i32,
    pub origin_x: i32,
    pub origin_y: i32,
}

impl Layout {
    /// Columns reserved beside the longest label (indicator and spacing)
    pub const MARGIN: i32 = 3;

    /// Compute the layout for `options` on a terminal of `(columns, rows)`.
    pub fn compute(
        options: &[MenuOption],
        x_padding: i32,
        y_padding: i32,
        (columns, rows): (u16, u16),
    ) -> Self {
        let longest = options
            .iter()
            .map(|option| option.label.chars().count())
            .max()
            .unwrap_or(0);
        let box_width = i32::try_from(longest)
            .unwrap_or(i32::MAX)
            .saturating_add(Self::MARGIN);
        let box_height = i32::try_from(options.len()).unwrap_or(i32::MAX);

        Layout {
            x_padding,
            y_padding,
            box_width,
            box_height,
            origin_x: i32::from(columns).saturating_sub(box_width).saturating_sub(2) / 2,
            origin_y: i32::from(rows).saturating_sub(box_height).saturating_sub(2) / 2,
        }
    }

    /// The border to draw around the options
    pub fn frame(&self) -> BoxFrame {
        BoxFrame {
            x: self.origin_x,
            y: self.origin_y,
            width: self.box_width,
            height: self.box_height,
            x_padding: self.x_padding,
            y_padding: self.y_padding,
        }
    }

    /// Cell holding the indicator for option `index`; the label follows it.
    pub fn option_cell(&self, index: usize) -> (i32, i32) {
        let row = i32::try_from(index).unwrap_or(i32::MAX);
        (
            self.origin_x.saturating_add(1),
            self.origin_y.saturating_add(1).saturating_add(row),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(labels: &[&str]) -> Vec<MenuOption> {
        labels
            .iter()
            .map(|label| MenuOption {
                label: label.to_string(),
                command: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_box_size_from_options() {
        let layout = Layout::compute(&options(&["A", "BB", "CCC"]), 0, 0, (80, 24));
        assert_eq!(layout.box_width, 6);
        assert_eq!(layout.box_height, 3);
    }

    #[test]
    fn test_centered_origin() {
        let layout = Layout::compute(&options(&["A", "BB", "CCC"]), 0, 0, (80, 24));
        // (80 - 6 - 2) / 2, (24 - 3 - 2) / 2
        assert_eq!((layout.origin_x, layout.origin_y), (36, 9));
    }

    #[test]
    fn test_padding_does_not_move_origin() {
        let plain = Layout::compute(&options(&["x"]), 0, 0, (40, 10));
        let padded = Layout::compute(&options(&["x"]), 3, 2, (40, 10));
        assert_eq!(
            (plain.origin_x, plain.origin_y),
            (padded.origin_x, padded.origin_y)
        );
        assert_eq!(padded.frame().origin(), (plain.origin_x - 3, plain.origin_y - 2));
    }

    #[test]
    fn test_label_width_counts_chars() {
        let layout = Layout::compute(&options(&["日本"]), 0, 0, (80, 24));
        assert_eq!(layout.box_width, 5);
    }

    #[test]
    fn test_empty_menu() {
        let layout = Layout::compute(&[], 0, 0, (80, 24));
        assert_eq!(layout.box_width, Layout::MARGIN);
        assert_eq!(layout.box_height, 0);
    }

    #[test]
    fn test_option_cells_inside_border() {
        let layout = Layout::compute(&options(&["a", "b"]), 0, 0, (20, 10));
        let (x, y) = (layout.origin_x, layout.origin_y);
        assert_eq!(layout.option_cell(0), (x + 1, y + 1));
        assert_eq!(layout.option_cell(1), (x + 1, y + 2));
    }
}
