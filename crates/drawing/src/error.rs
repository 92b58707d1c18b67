use thiserror::Error;

use crate::constants::MAX_SURFACE_DIMENSION;

/// Failures acquiring or reshaping an in-memory raster surface.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Invalid surface dimensions {width}x{height} (must be 1..={})", MAX_SURFACE_DIMENSION)]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Failed to allocate {bytes} bytes for a {width}x{height} surface")]
    AllocationFailed { width: u32, height: u32, bytes: usize },
    #[error("Snapshot is {found_width}x{found_height}, canvas is {width}x{height}")]
    SnapshotMismatch {
        width: u32,
        height: u32,
        found_width: u32,
        found_height: u32,
    },
}

/// Errors surfaced by the drawing engine.
///
/// Only environment resource faults reach the caller; parameter misuse is
/// always corrected in place.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Raster surface unavailable: {0}")]
    Raster(#[from] RasterError),
}
