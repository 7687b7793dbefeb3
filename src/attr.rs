// src/attr.rs

//! Defines the packed attribute byte (`Attr`) and the 16-bit memory word
//! (`Cell`) stored in one character-row buffer location.
//!
//! Layout of a cell word:
//!
//! ```text
//!  15      12 11       8 7                0
//! +----------+----------+------------------+
//! |    bg    |    fg    |  character code  |
//! +----------+----------+------------------+
//! ```

use crate::color::NamedColor;

/// Background color in the high nibble, foreground in the low nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attr(u8);

impl Attr {
    /// Packs raw color codes as `(bg << 4) | fg`, truncated to one byte.
    ///
    /// Codes are not range checked: a background of 16 or more wraps out of
    /// the byte, and a foreground of 16 or more spills into the background nibble.
    pub const fn pack(bg: u32, fg: u32) -> Self {
        Attr(((bg << 4) | fg) as u8)
    }

    pub const fn from_bits(bits: u8) -> Self {
        Attr(bits)
    }

    pub fn from_colors(bg: NamedColor, fg: NamedColor) -> Self {
        Attr::pack(bg.code() as u32, fg.code() as u32)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn background(self) -> u8 {
        self.0 >> 4
    }

    pub const fn foreground(self) -> u8 {
        self.0 & 0x0F
    }
}

/// One memory cell: a single-byte character code and its attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub code: u8,
    pub attr: Attr,
}

impl Cell {
    /// The value stored in memory: attribute in the high byte, code in the low byte.
    pub fn word(self) -> u16 {
        (u16::from(self.attr.bits()) << 8) | u16::from(self.code)
    }
}
