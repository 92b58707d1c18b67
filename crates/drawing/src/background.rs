//! Procedural canvas background
//!
//! A dark navy base with a dot grid. Dots dim towards the corners and each
//! carries a small brightness jitter. The jitter comes from a seeded RNG so
//! the pattern is identical for the same canvas size and seed.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::canvas::RasterCanvas;
use crate::color::Color;
use crate::constants::{BACKGROUND_BASE_COLOR, BACKGROUND_DOT_RADIUS, BACKGROUND_DOT_SPACING};

const DOT_BASE_ALPHA: f32 = 0.28;
const DOT_JITTER: f32 = 0.08;
const VIGNETTE_STRENGTH: f64 = 0.4;

/// Paint the dot-grid background over the whole canvas
pub fn paint_background(canvas: &mut RasterCanvas, seed: u64) {
    let [r, g, b] = BACKGROUND_BASE_COLOR;
    canvas.fill(Color::rgb(r, g, b));

    let mut rng = StdRng::seed_from_u64(seed);
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center = DVec2::new(width / 2.0, height / 2.0);
    let max_dist = center.length().max(1.0);

    let cols = (width / BACKGROUND_DOT_SPACING) as u32 + 2;
    let rows = (height / BACKGROUND_DOT_SPACING) as u32 + 2;

    for row in 0..rows {
        for col in 0..cols {
            let pos = DVec2::new(col as f64, row as f64) * BACKGROUND_DOT_SPACING;

            // 1.0 at the centre, 0.6 at the corners
            let center_factor = (1.0 - pos.distance(center) / max_dist * VIGNETTE_STRENGTH) as f32;
            let variation: f32 = rng.gen_range(-DOT_JITTER..=DOT_JITTER);
            let alpha = ((DOT_BASE_ALPHA + variation) * center_factor).clamp(0.0, 1.0);

            let dot = Color::rgba(0.20, 0.22, 0.34 + variation * 0.1, alpha);
            canvas.fill_disc(pos, BACKGROUND_DOT_RADIUS, dot);
        }
    }

    debug!(
        "paint_background: {}x{} canvas, {}x{} dots, seed {:#x}",
        canvas.width(),
        canvas.height(),
        cols,
        rows,
        seed
    );
}
