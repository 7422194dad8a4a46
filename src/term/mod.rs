//! Raw VT100 terminal output and input
//!
//! Everything written to the terminal passes through [`GraphicsMode`], which
//! tracks whether the stream is currently switched into the line-drawing
//! character set:
//! - [`glyphs`]: line-drawing glyph codes and the SO/SI mode bytes
//! - [`graphics`]: the mode state machine and its output chokepoint
//! - [`commands`]: control sequences crossterm does not provide
//! - [`draw`]: the titled box renderer
//! - [`input`]: byte-level key decoding
//! - [`session`]: raw-mode guard for the interactive session

pub mod commands;
pub mod draw;
pub mod glyphs;
pub mod graphics;
pub mod input;
pub mod session;

pub use draw::{draw_box, BoxFrame};
pub use glyphs::Glyph;
pub use graphics::GraphicsMode;
pub use input::{InputDecoder, Key, SpecialKey};
pub use session::RawModeGuard;
