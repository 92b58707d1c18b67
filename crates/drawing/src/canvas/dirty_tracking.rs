//! Tiles touched since the host last uploaded

use super::{PixelRect, RasterCanvas, TileCoord};

impl RasterCanvas {
    /// Record the tiles covered by a clipped, non-empty pixel rectangle
    pub(crate) fn mark_rect_dirty(&mut self, (x, y, w, h): PixelRect) {
        if w == 0 || h == 0 {
            return;
        }
        let last_x = (x + w - 1).min(self.surface.width - 1) / self.tile_size;
        let last_y = (y + h - 1).min(self.surface.height - 1) / self.tile_size;

        for ty in y / self.tile_size..=last_y {
            for tx in x / self.tile_size..=last_x {
                self.dirty_tiles.insert(TileCoord { x: tx, y: ty });
            }
        }
    }

    /// Every tile changed (fill or restore)
    pub(crate) fn mark_all_dirty(&mut self) {
        let (tiles_x, tiles_y) = (self.tiles_x, self.tiles_y);
        self.dirty_tiles
            .extend((0..tiles_y).flat_map(|y| (0..tiles_x).map(move |x| TileCoord { x, y })));
    }

    /// Drain the dirty set, row-major
    pub fn take_dirty_tiles(&mut self) -> Vec<TileCoord> {
        let mut tiles: Vec<TileCoord> = self.dirty_tiles.drain().collect();
        tiles.sort_by_key(|t| (t.y, t.x));
        tiles
    }
}
