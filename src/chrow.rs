// src/chrow.rs

//! Builds the contents of a character-row buffer: a character sequence and
//! the matching attribute sequence, grown in lockstep.

use anyhow::{bail, Result};
use log::{debug, trace};

use crate::attr::{Attr, Cell};
use crate::color::NamedColor;

/// Plain text shown gray-on-black at the start of the sample row.
pub const SAMPLE_GREETING: &str = "All your base are belong to us ";

/// Characters cycled through every background/foreground combination.
pub const SAMPLE_SWEEP: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Number of foreground codes per background in a sweep.
const SWEEP_COLUMNS: u32 = 16;

/// Character codes and attributes for consecutive memory cells.
///
/// `text` and `attrs` always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChrowBuffer {
    text: Vec<u8>,
    attrs: Vec<Attr>,
}

impl ChrowBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The test content preloaded into the display memory.
    pub fn sample() -> Result<Self> {
        let mut buf = ChrowBuffer::new();
        buf.push_uniform(
            SAMPLE_GREETING,
            Attr::from_colors(NamedColor::Black, NamedColor::Gray),
        )?;
        buf.push_sweep(SAMPLE_SWEEP)?;
        debug!("Built sample row buffer with {} cells", buf.len());
        Ok(buf)
    }

    /// Appends `fragment`, giving every new character the same attribute.
    pub fn push_uniform(&mut self, fragment: &str, attr: Attr) -> Result<()> {
        let codes = encode(fragment)?;
        trace!(
            "push_uniform: {} chars with attr {:#04x}",
            codes.len(),
            attr.bits()
        );
        self.attrs.extend(std::iter::repeat(attr).take(codes.len()));
        self.text.extend(codes);
        Ok(())
    }

    /// Appends `fragment`, stepping the new characters through attribute
    /// combinations: the k-th new character gets background `k / 16` and
    /// foreground `k % 16`.
    pub fn push_sweep(&mut self, fragment: &str) -> Result<()> {
        let codes = encode(fragment)?;
        trace!("push_sweep: {} chars", codes.len());
        self.attrs.extend(
            (0..codes.len() as u32).map(|k| Attr::pack(k / SWEEP_COLUMNS, k % SWEEP_COLUMNS)),
        );
        self.text.extend(codes);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Cells in memory index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.text
            .iter()
            .zip(&self.attrs)
            .map(|(&code, &attr)| Cell { code, attr })
    }
}

/// Converts text to single-byte character codes.
fn encode(fragment: &str) -> Result<Vec<u8>> {
    let mut codes = Vec::with_capacity(fragment.len());
    for (pos, ch) in fragment.chars().enumerate() {
        match u8::try_from(ch) {
            Ok(code) => codes.push(code),
            Err(_) => bail!(
                "character {:?} at position {} does not fit in a single-byte cell code",
                ch,
                pos
            ),
        }
    }
    Ok(codes)
}
