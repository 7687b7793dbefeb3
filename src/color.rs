// src/color.rs

//! Defines the xterm named colors (`NamedColor`) used to compose character
//! attributes, and the by-name lookup table for them.

use anyhow::anyhow;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Offset added to a color code to select its intense (bright) variant.
pub const INTENSE_OFFSET: u8 = 8;

/// The eight basic xterm colors (indices 0-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    Gray = 7, // xterm's "white"
}

/// Name -> color table. Built on first use and never mutated afterwards.
static COLORS: Lazy<HashMap<&'static str, NamedColor>> = Lazy::new(|| {
    NamedColor::ALL
        .iter()
        .map(|&color| (color.name(), color))
        .collect()
});

impl NamedColor {
    /// All named colors in table order.
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::Gray,
    ];

    /// The lowercase name this color is looked up by.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::Gray => "gray",
        }
    }

    /// The 3-bit color code (0-7).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The code of the intense variant (8-15).
    pub fn intense_code(self) -> u8 {
        self.code() + INTENSE_OFFSET
    }

    /// Looks a color up by its exact lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        COLORS.get(name).copied()
    }
}

impl FromStr for NamedColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedColor::from_name(s).ok_or_else(|| anyhow!("unknown color name '{}'", s))
    }
}
