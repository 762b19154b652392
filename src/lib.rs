//! # png2gba
//!
//! Convert decoded raster images into the data formats the Game Boy Advance
//! display hardware consumes: flat arrays of 15-bit BGR555 color words, or
//! 8-bit palette-indexed arrays with a fixed-capacity color table, optionally
//! reordered into the GBA's native 8x8 tiles.
//!
//! ## Quick Start
//!
//! ### Direct color mode
//!
//! ```
//! use png2gba::{gba_encode, EncodeOptions, ImageData};
//!
//! // 2x1 RGB image: one red pixel, one green pixel
//! let rgb = vec![255u8, 0, 0, 0, 255, 0];
//! let encoded = gba_encode(&rgb, 2, 1, 3, &EncodeOptions::default()).unwrap();
//! if let ImageData::Direct(words) = &encoded.data {
//!     assert_eq!(words, &[0x001F, 0x03E0]);
//! }
//! ```
//!
//! ### Indexed mode with an 8x8 tile layout
//!
//! ```no_run
//! use png2gba::{gba_encode, EncodeOptions, PaletteSize};
//!
//! # let rgb = vec![0u8; 8 * 8 * 3];
//! let opts = EncodeOptions {
//!     palette: Some(PaletteSize::Colors256),
//!     tiled: true,
//!     ..EncodeOptions::default()
//! };
//! let encoded = gba_encode(&rgb, 8, 8, 3, &opts)?;
//! println!("{}", png2gba::write_c_header(&encoded, "sprite"));
//! # Ok::<(), png2gba::Png2GbaError>(())
//! ```

use thiserror::Error;

pub mod color;
pub mod encoder;
pub mod header;
pub mod palette;
pub mod traverse;

pub use color::{color_word, parse_hex_triplet};
pub use encoder::{gba_encode, gba_encode_default, EncodeOptions, Encoded, ImageData};
pub use header::write_c_header;
pub use palette::{Palette, PaletteSize};
pub use traverse::{PixelOrder, Traversal};

/// Errors that can occur while encoding an image.
#[derive(Debug, Error)]
pub enum Png2GbaError {
    /// Color-key literal is not of the form `#RRGGBB`
    #[error("invalid color literal {0:?}: expected \"#RRGGBB\"")]
    InvalidColorFormat(String),

    /// Requested palette capacity is not one the hardware supports
    #[error("invalid palette size {0}: must be 16 or 256")]
    InvalidPaletteSize(u16),

    /// Image needs more distinct colors than the palette can hold.
    /// One slot is always withheld as headroom, so a palette of capacity
    /// `n` accepts at most `n - 1` entries (color key included).
    #[error("too many colors for a {capacity}-entry palette (last slot is reserved)")]
    PaletteOverflow { capacity: usize },

    /// Tiled output requested for an image that does not divide into 8x8 tiles
    #[error("tiled order requires dimensions that are multiples of 8, got {width}x{height}")]
    NotTileAligned { width: usize, height: usize },

    /// Image width or height is zero
    #[error("invalid dimensions: {width}x{height}")]
    ZeroDimensions { width: usize, height: usize },

    /// Pixel buffer has a channel count other than RGB or RGBA
    #[error("unsupported channel count {0}: must be 3 (RGB) or 4 (RGBA)")]
    InvalidChannelCount(usize),

    /// Pixel buffer length doesn't match the stated dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Result type for png2gba operations.
pub type Result<T> = core::result::Result<T, Png2GbaError>;

/// The GBA palette holds at most 256 colors.
pub const PALETTE_MAX: usize = 256;

/// The GBA always uses 8x8 tiles.
pub const TILE_SIZE: usize = 8;
