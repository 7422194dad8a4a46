//! Byte-level key decoding
//!
//! Input is read one byte at a time from a raw-mode terminal. `ESC [ X`
//! decodes to a [`SpecialKey`] whose code is `X - 'A'`, so the arrow keys map
//! to Up=0, Down=1, Right=2, Left=3. Anything else is a literal byte.
//!
//! An ESC that is not followed by `[` is returned as a literal ESC and the
//! byte after it is kept for the next [`InputDecoder::read_key`] call, so no
//! keystroke is swallowed.

use std::io::{self, Read};

pub const ESCAPE: u8 = 0x1b;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Literal(u8),
    Special(SpecialKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    Up,
    Down,
    Right,
    Left,
    Other(u8),
}

impl SpecialKey {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => SpecialKey::Up,
            1 => SpecialKey::Down,
            2 => SpecialKey::Right,
            3 => SpecialKey::Left,
            other => SpecialKey::Other(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            SpecialKey::Up => 0,
            SpecialKey::Down => 1,
            SpecialKey::Right => 2,
            SpecialKey::Left => 3,
            SpecialKey::Other(code) => code,
        }
    }
}

pub struct InputDecoder<R> {
    input: R,
    pending: Option<u8>,
}

impl<R: Read> InputDecoder<R> {
    pub fn new(input: R) -> Self {
        InputDecoder {
            input,
            pending: None,
        }
    }

    /// Block until one key is available; `Ok(None)` once input is exhausted.
    pub fn read_key(&mut self) -> io::Result<Option<Key>> {
        let Some(byte) = self.read_byte()? else {
            return Ok(None);
        };
        if byte != ESCAPE {
            return Ok(Some(Key::Literal(byte)));
        }

        match self.read_byte()? {
            Some(b'[') => {}
            Some(other) => {
                self.pending = Some(other);
                return Ok(Some(Key::Literal(ESCAPE)));
            }
            None => return Ok(Some(Key::Literal(ESCAPE))),
        }

        Ok(self
            .read_byte()?
            .map(|code| Key::Special(SpecialKey::from_code(code.wrapping_sub(b'A')))))
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending.take() {
            return Ok(Some(byte));
        }

        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}
