//! Spirograph drawing system - curve math, raster canvas and undo history
//!
//! This crate provides the core of the spirograph engine:
//! - [`curve`] - Hypotrochoid point generation, scaling and mechanism pose
//! - [`color`] - Color type and the per-segment color resolver
//! - [`surface`] - CPU 8-bit RGBA pixel storage
//! - [`canvas`] - Raster canvas with line compositing and dirty tracking
//! - [`background`] - Procedural dot-grid background
//! - [`undo`] - Bounded undo stack
//! - [`ticker`] - Fixed-rate cooperative tick source
//! - [`events`] - Engine notifications for observers
//! - [`engine`] - Drawing engine state machine
//! - [`presets`] - Curated mechanism presets

pub mod background;
pub mod canvas;
pub mod color;
pub mod constants;
pub mod curve;
pub mod engine;
pub mod error;
pub mod events;
pub mod presets;
pub mod surface;
pub mod ticker;
pub mod types;
pub mod undo;

pub use background::*;
pub use canvas::*;
pub use color::*;
pub use constants::*;
pub use curve::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use presets::*;
pub use surface::*;
pub use ticker::*;
pub use types::*;
pub use undo::*;

pub use spiro_config::EngineConfig;
