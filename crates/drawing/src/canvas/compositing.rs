//! Line segment compositing
//!
//! A segment is rasterized as a capsule (round caps) of the given width.
//! Coverage falls off linearly over one pixel at the edge, which gives a
//! cheap anti-aliased line that joins cleanly with its neighbours.

use glam::DVec2;
use tracing::trace;

use super::{PixelRect, RasterCanvas};
use crate::color::Color;

impl RasterCanvas {
    /// Composite a line from `a` to `b` with round caps.
    ///
    /// Returns the affected pixel rectangle, or None if the segment lies
    /// entirely outside the canvas.
    pub fn draw_segment(&mut self, a: DVec2, b: DVec2, width: f32, color: Color) -> Option<PixelRect> {
        let half_width = (width as f64 * 0.5).max(0.25);
        self.composite_capsule(a, b, half_width, color)
    }

    /// Composite a filled, anti-aliased disc
    pub fn fill_disc(&mut self, center: DVec2, radius: f64, color: Color) -> Option<PixelRect> {
        self.composite_capsule(center, center, radius, color)
    }

    fn composite_capsule(&mut self, a: DVec2, b: DVec2, radius: f64, color: Color) -> Option<PixelRect> {
        if !a.is_finite() || !b.is_finite() || radius.is_nan() || radius <= 0.0 || color.a <= 0.0 {
            return None;
        }

        // Coverage reaches half a pixel past the radius
        let reach = radius + 0.5;
        let min = a.min(b) - DVec2::splat(reach);
        let max = a.max(b) + DVec2::splat(reach);

        let width = self.surface.width as f64;
        let height = self.surface.height as f64;
        let x_min = min.x.floor().clamp(0.0, width) as u32;
        let y_min = min.y.floor().clamp(0.0, height) as u32;
        let x_max = max.x.ceil().clamp(0.0, width) as u32;
        let y_max = max.y.ceil().clamp(0.0, height) as u32;

        if x_min >= x_max || y_min >= y_max {
            return None;
        }

        let ab = b - a;
        let len_sq = ab.length_squared();

        for py in y_min..y_max {
            for px in x_min..x_max {
                // Sample at the pixel centre
                let p = DVec2::new(px as f64 + 0.5, py as f64 + 0.5);
                let t = if len_sq > 0.0 {
                    ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let distance = p.distance(a + ab * t);
                let coverage = segment_coverage(distance, radius);
                if coverage > 0.0 {
                    self.surface.blend_pixel(px, py, color, coverage);
                }
            }
        }

        let rect = (x_min, y_min, x_max - x_min, y_max - y_min);
        trace!(
            "composite_capsule: ({:.1}, {:.1}) -> ({:.1}, {:.1}) r={:.2} rect={:?}",
            a.x,
            a.y,
            b.x,
            b.y,
            radius,
            rect
        );
        self.mark_rect_dirty(rect);
        Some(rect)
    }
}

/// Coverage of a pixel centre `distance` away from a stroke of half-width `radius`.
///
/// 1.0 inside, 0.0 beyond `radius + 0.5`, linear in between.
#[inline]
pub fn segment_coverage(distance: f64, radius: f64) -> f32 {
    (radius + 0.5 - distance).clamp(0.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::TileCoord;

    fn canvas() -> RasterCanvas {
        RasterCanvas::new(64, 64, 32).unwrap()
    }

    #[test]
    fn test_coverage_falloff() {
        assert_eq!(segment_coverage(0.0, 1.0), 1.0);
        assert_eq!(segment_coverage(0.5, 1.0), 1.0);
        assert!((segment_coverage(1.25, 1.0) - 0.25).abs() < 1e-6);
        assert_eq!(segment_coverage(2.0, 1.0), 0.0);
    }

    #[test]
    fn test_horizontal_segment() {
        let mut canvas = canvas();
        canvas.draw_segment(DVec2::new(10.0, 20.5), DVec2::new(30.0, 20.5), 1.0, Color::WHITE);

        // On the line
        assert_eq!(canvas.surface().get_pixel(20, 20), Some([255, 255, 255, 255]));
        // Well away from the line
        assert_eq!(canvas.surface().get_pixel(20, 25), Some([0, 0, 0, 255]));
        // Beyond the round cap
        assert_eq!(canvas.surface().get_pixel(35, 20), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_segment_outside_canvas() {
        let mut canvas = canvas();
        let result = canvas.draw_segment(DVec2::new(-50.0, -50.0), DVec2::new(-40.0, -40.0), 2.0, Color::WHITE);
        assert!(result.is_none());
        assert!(canvas.take_dirty_tiles().is_empty());
    }

    #[test]
    fn test_segment_clipped_at_edge() {
        let mut canvas = canvas();
        let (x, y, w, h) = canvas
            .draw_segment(DVec2::new(60.0, 5.0), DVec2::new(80.0, 5.0), 2.0, Color::WHITE)
            .unwrap();
        assert!(x + w <= 64);
        assert!(y + h <= 64);
        assert_eq!(canvas.take_dirty_tiles(), vec![TileCoord { x: 1, y: 0 }]);
    }

    #[test]
    fn test_non_finite_segment_ignored() {
        let mut canvas = canvas();
        let result = canvas.draw_segment(DVec2::new(f64::NAN, 1.0), DVec2::new(5.0, 5.0), 2.0, Color::WHITE);
        assert!(result.is_none());
    }

    #[test]
    fn test_fill_disc() {
        let mut canvas = canvas();
        canvas.fill_disc(DVec2::new(32.0, 32.0), 3.0, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(canvas.surface().get_pixel(31, 31), Some([255, 0, 0, 255]));
        assert_eq!(canvas.surface().get_pixel(40, 40), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_transparent_color_is_noop() {
        let mut canvas = canvas();
        let before = canvas.try_snapshot().unwrap();
        let result = canvas.draw_segment(DVec2::new(1.0, 1.0), DVec2::new(9.0, 9.0), 2.0, Color::WHITE.with_alpha(0.0));
        assert!(result.is_none());
        assert_eq!(canvas.try_snapshot().unwrap(), before);
    }
}
