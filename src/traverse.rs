//! Pixel traversal orders: plain raster scan, or the GBA's 8x8 tile layout.
//!
//! Tiled order partitions the image into 8x8 blocks scanned left-to-right,
//! top-to-bottom at the block level, with each block scanned row-major
//! internally. Character and sprite data must be laid out this way before
//! it lands in VRAM.

use crate::{Png2GbaError, Result, TILE_SIZE};

/// The order in which pixels are visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelOrder {
    /// Raster order: left-to-right within a row, rows top to bottom.
    #[default]
    Linear,
    /// 8x8 tile order for VRAM character data.
    Tiled,
}

/// A finite, forward-only walk over every pixel coordinate of an image.
///
/// Yields `(row, col)` pairs, each coordinate exactly once, in the order
/// selected at construction. The cursor is owned by the instance; a fresh
/// walk is a fresh `Traversal`.
///
/// # Example
/// ```
/// use png2gba::{PixelOrder, Traversal};
///
/// let coords: Vec<_> = Traversal::new(2, 2, PixelOrder::Linear)?.collect();
/// assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
/// # Ok::<(), png2gba::Png2GbaError>(())
/// ```
#[derive(Debug)]
pub struct Traversal {
    width: usize,
    height: usize,
    order: PixelOrder,
    row: usize,
    col: usize,
    // position within the current 8x8 tile, both in [0, 8)
    tile_row: usize,
    tile_col: usize,
}

impl Traversal {
    /// Set up a walk over a `width` x `height` image.
    ///
    /// # Errors
    /// - [`Png2GbaError::ZeroDimensions`] if either dimension is zero.
    /// - [`Png2GbaError::NotTileAligned`] if `order` is
    ///   [`PixelOrder::Tiled`] and either dimension is not a multiple of
    ///   8. The stepping rules assume whole tiles and would otherwise walk
    ///   out of bounds, so this is checked before any pixel is visited.
    pub fn new(width: usize, height: usize, order: PixelOrder) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Png2GbaError::ZeroDimensions { width, height });
        }
        if order == PixelOrder::Tiled && (width % TILE_SIZE != 0 || height % TILE_SIZE != 0) {
            return Err(Png2GbaError::NotTileAligned { width, height });
        }
        Ok(Self {
            width,
            height,
            order,
            row: 0,
            col: 0,
            tile_row: 0,
            tile_col: 0,
        })
    }

    fn step_linear(&mut self) {
        self.col += 1;
        if self.col >= self.width {
            self.row += 1;
            self.col = 0;
        }
    }

    fn step_tiled(&mut self) {
        self.col += 1;
        self.tile_col += 1;

        if self.tile_col >= TILE_SIZE {
            // end of a tile row: drop to the next one
            self.row += 1;
            self.tile_row += 1;
            self.col -= TILE_SIZE;
            self.tile_col = 0;

            // end of the whole tile: move right to the next tile
            if self.tile_row >= TILE_SIZE {
                self.row -= TILE_SIZE;
                self.tile_row = 0;
                self.col += TILE_SIZE;
            }

            // end of the tile row across the image: next row of tiles
            if self.col >= self.width {
                self.tile_col = 0;
                self.tile_row = 0;
                self.col = 0;
                self.row += TILE_SIZE;
            }
        }
    }
}

impl Iterator for Traversal {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.row == self.height {
            return None;
        }
        let coord = (self.row, self.col);
        match self.order {
            PixelOrder::Linear => self.step_linear(),
            PixelOrder::Tiled => self.step_tiled(),
        }
        Some(coord)
    }
}
