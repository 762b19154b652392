//! The encoder driver: walks an image in the requested pixel order and
//! produces either direct 15-bit color words or palette indices plus the
//! color table.

use crate::color::{color_word, parse_hex_triplet};
use crate::palette::{Palette, PaletteSize};
use crate::traverse::{PixelOrder, Traversal};
use crate::{Png2GbaError, Result};

/// Options for the GBA encoder.
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// `Some(size)` selects indexed mode with a palette of that capacity;
    /// `None` emits direct 15-bit color words.
    pub palette: Option<PaletteSize>,

    /// Reorder pixels into 8x8 tiles instead of raster order.
    /// Requires both image dimensions to be multiples of 8.
    pub tiled: bool,

    /// `#RRGGBB` literal reserved as palette index 0 in indexed mode.
    /// The GBA treats palette index 0 as transparent, so sprites use this
    /// color for their see-through background.
    pub color_key: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            palette: None,
            tiled: false,
            color_key: "#ff00ff".to_string(),
        }
    }
}

/// Encoded pixel data, one value per pixel in traversal order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageData {
    /// 15-bit color words.
    Direct(Vec<u16>),
    /// Palette indices, plus the full fixed-capacity color table.
    Indexed { indices: Vec<u8>, palette: Vec<u16> },
}

/// The result of encoding one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    pub width: usize,
    pub height: usize,
    pub data: ImageData,
}

/// Encode a raw pixel buffer into GBA data.
///
/// # Arguments
/// * `pixels` - Raw pixel data, `channels` bytes per pixel, row-major
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 3 (RGB) or 4 (RGBA); alpha is never consulted
/// * `opts` - Encoding options
///
/// # Returns
/// An [`Encoded`] holding one value per pixel in the selected order, and
/// in indexed mode the palette table with the color key at index 0.
///
/// # Errors
/// All validation happens before any pixel is visited: dimensions,
/// channel count, buffer length, tile alignment, and the color-key
/// literal. During the walk, [`Png2GbaError::PaletteOverflow`] aborts
/// indexed encoding as soon as the image exceeds the palette; no partial
/// result is returned.
///
/// # Example
/// ```
/// use png2gba::{gba_encode, EncodeOptions, ImageData};
///
/// let rgb = vec![255u8, 255, 255]; // 1x1 white pixel
/// let encoded = gba_encode(&rgb, 1, 1, 3, &EncodeOptions::default())?;
/// assert_eq!(encoded.data, ImageData::Direct(vec![0x7FFF]));
/// # Ok::<(), png2gba::Png2GbaError>(())
/// ```
pub fn gba_encode(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    opts: &EncodeOptions,
) -> Result<Encoded> {
    if width == 0 || height == 0 {
        return Err(Png2GbaError::ZeroDimensions { width, height });
    }
    if channels != 3 && channels != 4 {
        return Err(Png2GbaError::InvalidChannelCount(channels));
    }
    let expected = width * height * channels;
    if pixels.len() != expected {
        return Err(Png2GbaError::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    // Fail on a bad color key before any traversal, even in direct mode
    let color_key = parse_hex_triplet(&opts.color_key)?;

    let order = if opts.tiled {
        PixelOrder::Tiled
    } else {
        PixelOrder::Linear
    };
    let traversal = Traversal::new(width, height, order)?;

    let words = traversal.map(|(row, col)| {
        let at = (row * width + col) * channels;
        color_word(pixels[at], pixels[at + 1], pixels[at + 2])
    });

    let data = match opts.palette {
        None => ImageData::Direct(words.collect()),
        Some(size) => {
            let mut palette = Palette::new(size);
            // reserve index 0 for the transparent color key
            palette.insert(color_key)?;

            let mut indices = Vec::with_capacity(width * height);
            for word in words {
                indices.push(palette.insert(word)?);
            }
            ImageData::Indexed {
                indices,
                palette: palette.table().to_vec(),
            }
        }
    };

    Ok(Encoded {
        width,
        height,
        data,
    })
}

/// Encode with default options (direct color, linear order).
#[inline]
pub fn gba_encode_default(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Encoded> {
    gba_encode(pixels, width, height, channels, &EncodeOptions::default())
}
