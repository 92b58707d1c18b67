//! CPU surface for the spirograph canvas - 8-bit RGBA storage

use crate::color::Color;
use crate::constants::MAX_SURFACE_DIMENSION;
use crate::error::RasterError;

/// An 8-bit RGBA CPU surface
/// Stores pixels as [u8; 4] in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 4]>,
}

/// An independently owned copy of a surface's pixels
///
/// Snapshots never alias the live buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSnapshot {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl CanvasSnapshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Bytes held by this snapshot
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * 4
    }
}

/// Allocate a pixel vector without aborting on allocation failure
fn try_alloc_pixels(width: u32, height: u32) -> Result<Vec<[u8; 4]>, RasterError> {
    let pixel_count = (width as usize) * (height as usize);
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(pixel_count)
        .map_err(|_| RasterError::AllocationFailed {
            width,
            height,
            bytes: pixel_count.saturating_mul(4),
        })?;
    Ok(pixels)
}

impl PixelSurface {
    /// Create a new surface initialized to opaque black
    ///
    /// Fails if a dimension is zero or too large, or the buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 || width > MAX_SURFACE_DIMENSION || height > MAX_SURFACE_DIMENSION {
            return Err(RasterError::InvalidDimensions { width, height });
        }

        let mut pixels = try_alloc_pixels(width, height)?;
        pixels.resize((width as usize) * (height as usize), [0, 0, 0, 255]);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Fill the surface with a solid color
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.to_rgba8());
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = rgba;
        }
    }

    /// Blend a color onto an existing pixel (source-over)
    /// Formula: out = src * alpha + dst * (1 - alpha), alpha = color.a * coverage
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let src_alpha = (color.a * coverage).clamp(0.0, 1.0);
        if src_alpha <= 0.0 {
            return;
        }
        let inv = 1.0 - src_alpha;
        let dst = self.pixels[i];
        let channel = |src: f32, dst: u8| -> u8 {
            let dst = dst as f32 / 255.0;
            ((src.clamp(0.0, 1.0) * src_alpha + dst * inv) * 255.0).round() as u8
        };

        self.pixels[i] = [
            channel(color.r, dst[0]),
            channel(color.g, dst[1]),
            channel(color.b, dst[2]),
            channel(1.0, dst[3]),
        ];
    }

    /// Copy the pixels into an independently owned snapshot
    pub fn try_snapshot(&self) -> Result<CanvasSnapshot, RasterError> {
        let mut pixels = try_alloc_pixels(self.width, self.height)?;
        pixels.extend_from_slice(&self.pixels);
        Ok(CanvasSnapshot {
            width: self.width,
            height: self.height,
            pixels,
        })
    }

    /// Overwrite every pixel from a snapshot of the same size
    pub fn restore(&mut self, snapshot: &CanvasSnapshot) -> Result<(), RasterError> {
        if snapshot.width != self.width || snapshot.height != self.height {
            return Err(RasterError::SnapshotMismatch {
                width: self.width,
                height: self.height,
                found_width: snapshot.width,
                found_height: snapshot.height,
            });
        }
        self.pixels.copy_from_slice(&snapshot.pixels);
        Ok(())
    }

    /// Raw pixel bytes, RGBA8 row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Owned image copy of the surface
    ///
    /// Falls back to a blank image of the same size if the copy cannot be built.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.as_bytes().to_vec())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }
}
