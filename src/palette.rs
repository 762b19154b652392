//! Bounded color tables with first-seen index assignment.
//!
//! The GBA addresses palette RAM as a fixed table of 16 or 256 entries.
//! Index 0 is conventionally the transparent color key, so the encoder
//! seeds it before any image pixel is looked up.

use crate::{Png2GbaError, Result, PALETTE_MAX};

/// Palette capacities the hardware supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteSize {
    /// 16-entry palette (4 bits per pixel on hardware)
    Colors16,
    /// 256-entry palette (8 bits per pixel)
    Colors256,
}

impl PaletteSize {
    /// Number of slots in a palette of this size.
    #[must_use]
    pub fn capacity(self) -> usize {
        match self {
            PaletteSize::Colors16 => 16,
            PaletteSize::Colors256 => PALETTE_MAX,
        }
    }
}

impl TryFrom<u16> for PaletteSize {
    type Error = Png2GbaError;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            16 => Ok(PaletteSize::Colors16),
            256 => Ok(PaletteSize::Colors256),
            other => Err(Png2GbaError::InvalidPaletteSize(other)),
        }
    }
}

/// A fixed-capacity color table mapping 15-bit color words to indices.
///
/// Inserting a color already in the table returns its existing index
/// without mutating anything, so indices are purely a function of
/// first-occurrence order. The last slot is never filled by ordinary
/// insertion: a palette of capacity `n` holds at most `n - 1` colors
/// before [`insert`](Palette::insert) reports overflow. Downstream
/// tooling depends on that headroom slot staying free, quirky as it is.
#[derive(Debug)]
pub struct Palette {
    colors: Vec<u16>,
    used: usize,
}

impl Palette {
    /// Create an empty palette with every slot zeroed.
    #[must_use]
    pub fn new(size: PaletteSize) -> Self {
        Self {
            colors: vec![0; size.capacity()],
            used: 0,
        }
    }

    /// Look up a color word, inserting it if it is new.
    ///
    /// Returns the color's index. Lookup is idempotent: repeated inserts
    /// of the same word return the same index and leave `used` unchanged.
    ///
    /// # Errors
    /// [`Png2GbaError::PaletteOverflow`] once `capacity - 1` slots are
    /// occupied and the color is not already present.
    pub fn insert(&mut self, color: u16) -> Result<u8> {
        if let Some(index) = self.colors[..self.used].iter().position(|&c| c == color) {
            return Ok(index as u8);
        }

        if self.used >= self.capacity() - 1 {
            return Err(Png2GbaError::PaletteOverflow {
                capacity: self.capacity(),
            });
        }

        self.colors[self.used] = color;
        self.used += 1;
        Ok((self.used - 1) as u8)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.colors.len()
    }

    /// The full fixed-capacity table, unoccupied slots zeroed.
    ///
    /// The table is always emitted whole rather than as the used prefix,
    /// matching the memory layout the device expects.
    #[must_use]
    pub fn table(&self) -> &[u16] {
        &self.colors
    }
}
