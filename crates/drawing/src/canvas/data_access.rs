//! Whole-canvas operations and tile data access

use super::{PixelRect, RasterCanvas, TileCoord};
use crate::color::Color;
use crate::error::RasterError;
use crate::surface::CanvasSnapshot;

impl RasterCanvas {
    /// Fill the whole canvas with a solid color
    pub fn fill(&mut self, color: Color) {
        self.surface.fill(color);
        self.mark_all_dirty();
    }

    /// Take an independently owned copy of the canvas
    pub fn try_snapshot(&self) -> Result<CanvasSnapshot, RasterError> {
        self.surface.try_snapshot()
    }

    /// Replace the canvas contents with a snapshot, in place
    pub fn restore(&mut self, snapshot: &CanvasSnapshot) -> Result<(), RasterError> {
        self.surface.restore(snapshot)?;
        self.mark_all_dirty();
        Ok(())
    }

    /// Owned image copy for export and display
    pub fn to_image(&self) -> image::RgbaImage {
        self.surface.to_image()
    }

    /// Get tile bounds (x, y, width, height) in pixel coordinates
    pub fn tile_bounds(&self, coord: TileCoord) -> PixelRect {
        let tile_start_x = coord.x.saturating_mul(self.tile_size);
        let tile_start_y = coord.y.saturating_mul(self.tile_size);

        // Edge tiles may be smaller
        let tile_width = self.tile_size.min(self.surface.width.saturating_sub(tile_start_x));
        let tile_height = self.tile_size.min(self.surface.height.saturating_sub(tile_start_y));

        (tile_start_x, tile_start_y, tile_width, tile_height)
    }

    /// Copy a tile's pixels as RGBA8 bytes, row-major
    /// Out-of-range tiles yield an empty Vec
    pub fn tile_bytes(&self, coord: TileCoord) -> Vec<u8> {
        let (x0, y0, w, h) = self.tile_bounds(coord);
        let mut data = Vec::with_capacity((w as usize) * (h as usize) * 4);

        for y in y0..y0 + h {
            for x in x0..x0 + w {
                if let Some(pixel) = self.surface.get_pixel(x, y) {
                    data.extend_from_slice(&pixel);
                }
            }
        }

        data
    }
}
