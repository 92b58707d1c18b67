/// Largest canvas dimension a raster surface may be created with.
pub const MAX_SURFACE_DIMENSION: u32 = 8192;

/// Thinnest line the compositor draws, in pixels.
pub const MIN_LINE_WIDTH: f32 = 0.5;

/// Thickest line the compositor draws, in pixels.
pub const MAX_LINE_WIDTH: f32 = 64.0;

/// Outer radius substituted for a non-finite or non-positive input.
pub const MIN_OUTER_RADIUS: f64 = 1.0;

/// Smallest effective rolling radius.
pub const MIN_INNER_RADIUS: f64 = 1.0;

/// Background dot grid spacing in pixels.
pub const BACKGROUND_DOT_SPACING: f64 = 28.0;

/// Background dot radius in pixels.
pub const BACKGROUND_DOT_RADIUS: f64 = 1.2;

/// Dark navy canvas base.
pub const BACKGROUND_BASE_COLOR: [f32; 3] = [0.047, 0.047, 0.094];
