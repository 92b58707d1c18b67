//! Raster canvas with tile dirty tracking

mod compositing;
mod data_access;
mod dirty_tracking;

use std::collections::HashSet;

use crate::error::RasterError;
use crate::surface::PixelSurface;

pub use compositing::segment_coverage;

/// Tile coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
}

/// Pixel rectangle (x, y, width, height) touched by a raster operation
pub type PixelRect = (u32, u32, u32, u32);

/// The single mutable bitmap a drawing engine paints into
///
/// Modified tiles are tracked so hosts can re-upload only what changed.
pub struct RasterCanvas {
    pub(crate) surface: PixelSurface,
    pub(crate) tile_size: u32,
    tiles_x: u32,
    tiles_y: u32,
    pub(crate) dirty_tiles: HashSet<TileCoord>,
}

impl RasterCanvas {
    /// Create a canvas with the given dimensions and tile size
    pub fn new(width: u32, height: u32, tile_size: u32) -> Result<Self, RasterError> {
        let surface = PixelSurface::new(width, height)?;
        let tile_size = tile_size.max(1);
        let tiles_x = width.div_ceil(tile_size);
        let tiles_y = height.div_ceil(tile_size);

        Ok(Self {
            surface,
            tile_size,
            tiles_x,
            tiles_y,
            dirty_tiles: HashSet::new(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.surface.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.surface.height
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    #[inline]
    pub fn tiles_x(&self) -> u32 {
        self.tiles_x
    }

    #[inline]
    pub fn tiles_y(&self) -> u32 {
        self.tiles_y
    }

    /// Read-only access to the underlying pixels
    #[inline]
    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }
}
