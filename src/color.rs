//! 15-bit BGR555 color words, the GBA's native pixel format.
//!
//! Each 8-bit channel is truncated to its top 5 bits and packed as
//! `(B5 << 10) | (G5 << 5) | R5`. The truncation is lossy by contract:
//! two 8-bit triples differing only in their low 3 bits per channel map
//! to the same word.

use crate::{Png2GbaError, Result};

/// Pack an 8-bit RGB triple into a 15-bit color word.
#[inline]
#[must_use]
pub fn color_word(r: u8, g: u8, b: u8) -> u16 {
    ((b as u16 >> 3) << 10) | ((g as u16 >> 3) << 5) | (r as u16 >> 3)
}

/// Parse a `#RRGGBB` literal into a 15-bit color word.
///
/// The literal must be exactly 7 characters: a `#` followed by 6 hex
/// digits. The same 8-to-5 bit channel reduction as [`color_word`]
/// applies, so `#ff00ff` and `#f807f8` name the same word.
///
/// # Errors
/// [`Png2GbaError::InvalidColorFormat`] if the literal is malformed.
pub fn parse_hex_triplet(literal: &str) -> Result<u16> {
    let malformed = || Png2GbaError::InvalidColorFormat(literal.to_string());

    let hex = literal.strip_prefix('#').ok_or_else(malformed)?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| malformed())?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| malformed())?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| malformed())?;

    Ok(color_word(r, g, b))
}
