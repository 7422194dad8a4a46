// VT100 special graphics character set (DEC line drawing)

/// Shift Out: select G1, the line-drawing set
pub const SHIFT_OUT: u8 = 0x0e;

/// Shift In: select G0, the normal ASCII set
pub const SHIFT_IN: u8 = 0x0f;

/// Bytes that render as line-drawing glyphs while G1 is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Glyph {
    TopLeft = b'l',
    Horizontal = b'q',
    TopRight = b'k',
    Vertical = b'x',
    BottomLeft = b'm',
    BottomRight = b'j',
    /// Selection indicator (diamond)
    Diamond = b'`',
}

impl Glyph {
    pub fn code(self) -> u8 {
        self as u8
    }
}
