//! Colors and per-segment color resolution

use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color, channels in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Opaque color from 8-bit channels
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Opaque color from HSV, hue as a fraction of a full turn (wraps)
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);
        let h = hue.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::rgb(r, g, b)
    }

    /// Hue in degrees, 0..360. Greys report 0.
    pub fn hue_degrees(&self) -> f32 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        if delta <= f32::EPSILON {
            return 0.0;
        }

        let sector = if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };
        (sector * 60.0).rem_euclid(360.0)
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantize to 8-bit RGBA
    pub fn to_rgba8(self) -> [u8; 4] {
        self.to_array().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

/// How each segment of a stroke is colored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorMode {
    /// Every segment uses the same color
    Solid(Color),
    /// Hue sweeps 0..360 degrees along the stroke
    Rainbow,
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Solid(Color::WHITE)
    }
}

impl ColorMode {
    /// Color for segment `index` of `total`
    pub fn resolve(&self, index: usize, total: usize) -> Color {
        resolve(self, index, total)
    }
}

/// Resolve the color of segment `index` out of `total`.
pub fn resolve(mode: &ColorMode, index: usize, total: usize) -> Color {
    match mode {
        ColorMode::Solid(color) => *color,
        ColorMode::Rainbow => {
            let hue = index as f64 / total.max(1) as f64;
            Color::from_hsv(hue as f32, 1.0, 1.0)
        }
    }
}

/// A named palette entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub color: Color,
}

/// Solid pen colors offered to the user
pub const PALETTE: [PaletteColor; 8] = [
    PaletteColor { name: "white", color: Color::from_rgb8(255, 255, 255) },
    PaletteColor { name: "red", color: Color::from_rgb8(255, 70, 70) },
    PaletteColor { name: "orange", color: Color::from_rgb8(255, 160, 40) },
    PaletteColor { name: "yellow", color: Color::from_rgb8(255, 230, 50) },
    PaletteColor { name: "green", color: Color::from_rgb8(60, 220, 90) },
    PaletteColor { name: "cyan", color: Color::from_rgb8(40, 220, 220) },
    PaletteColor { name: "blue", color: Color::from_rgb8(60, 100, 255) },
    PaletteColor { name: "magenta", color: Color::from_rgb8(220, 60, 220) },
];

/// Look up a palette color by name (case-insensitive)
pub fn palette_color(name: &str) -> Option<Color> {
    PALETTE
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| entry.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solid_is_constant() {
        let c = Color::from_rgb8(255, 160, 40);
        let mode = ColorMode::Solid(c);
        for i in [0, 1, 500, 5999, 6000] {
            assert_eq!(resolve(&mode, i, 6000), c);
        }
    }

    #[test]
    fn test_rainbow_starts_red() {
        let c = resolve(&ColorMode::Rainbow, 0, 6000);
        assert_eq!(c.hue_degrees(), 0.0);
        assert_relative_eq!(c.r, 1.0);
        assert_relative_eq!(c.g, 0.0);
        assert_relative_eq!(c.b, 0.0);
    }

    #[test]
    fn test_rainbow_wraps_at_end() {
        let n = 6000;
        let near_end = resolve(&ColorMode::Rainbow, n - 1, n);
        let expected = 360.0 * (n - 1) as f32 / n as f32;
        assert_relative_eq!(near_end.hue_degrees(), expected, epsilon = 0.05);

        let quarter = resolve(&ColorMode::Rainbow, n / 4, n);
        assert_relative_eq!(quarter.hue_degrees(), 90.0, epsilon = 0.05);

        // index == total is a full turn, back to red
        let end = resolve(&ColorMode::Rainbow, n, n);
        let start = resolve(&ColorMode::Rainbow, 0, n);
        assert_relative_eq!(end.r, start.r, epsilon = 1e-4);
        assert_relative_eq!(end.g, start.g, epsilon = 1e-4);
        assert_relative_eq!(end.b, start.b, epsilon = 1e-4);
    }

    #[test]
    fn test_rainbow_sweep_is_monotonic() {
        let n = 360;
        let mut last = -1.0;
        for i in 0..n {
            let hue = resolve(&ColorMode::Rainbow, i, n).hue_degrees();
            assert!(hue >= last, "hue went backwards at {i}: {hue} < {last}");
            last = hue;
        }
    }

    #[test]
    fn test_rainbow_zero_total() {
        // total 0 is treated as 1
        let c = resolve(&ColorMode::Rainbow, 0, 0);
        assert_eq!(c.hue_degrees(), 0.0);
    }

    #[test]
    fn test_hsv_primaries() {
        let green = Color::from_hsv(1.0 / 3.0, 1.0, 1.0);
        assert_relative_eq!(green.hue_degrees(), 120.0, epsilon = 1e-3);
        let blue = Color::from_hsv(2.0 / 3.0, 1.0, 1.0);
        assert_relative_eq!(blue.hue_degrees(), 240.0, epsilon = 1e-3);
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Color::WHITE.to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Color::rgba(2.0, -1.0, 0.5, 0.0).to_rgba8(), [255, 0, 128, 0]);
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(palette_color("Cyan"), Some(Color::from_rgb8(40, 220, 220)));
        assert_eq!(palette_color("mauve"), None);
    }
}
