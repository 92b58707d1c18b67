//! Shared configuration for the spirograph engine
//!
//! This crate provides the single source of truth for canvas dimensions,
//! animation timing, undo depth and curve resolution shared by the drawing
//! engine and every host that drives it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default canvas edge length in pixels (square canvas)
pub const DEFAULT_CANVAS_SIZE: u32 = 680;

/// Padding between the canvas edge and the outermost curve point
pub const DEFAULT_MARGIN: f64 = 28.0;

/// Animation tick rate, independent of the requested drawing speed
pub const DEFAULT_TICK_HZ: u32 = 60;

/// Number of canvas snapshots kept for undo
pub const DEFAULT_MAX_UNDO: usize = 20;

/// Curve resolution for a full stroke (steps, so steps + 1 points)
pub const DEFAULT_CURVE_STEPS: usize = 6000;

/// Curve resolution for the ghost preview trace
pub const DEFAULT_GHOST_STEPS: usize = 900;

/// Tile size used for dirty-region tracking
pub const DEFAULT_TILE_SIZE: u32 = 128;

/// Seed for the background dot jitter ("SPIR")
pub const DEFAULT_BACKGROUND_SEED: u64 = 0x5350_4952;

/// Ticks a host may catch up on after a stall before the backlog is dropped
pub const DEFAULT_MAX_CATCH_UP_TICKS: u32 = 4;

/// Smallest canvas the engine accepts after sanitizing
pub const MIN_CANVAS_SIZE: u32 = 16;

/// Largest canvas the engine accepts after sanitizing
pub const MAX_CANVAS_SIZE: u32 = 4096;

const MAX_TICK_HZ: u32 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Engine configuration
///
/// Every field has a default, so a partial JSON document only overrides
/// the keys it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Canvas edge length in pixels
    pub canvas_size: u32,
    /// Margin kept free around the curve, in pixels
    pub margin: f64,
    /// Animation ticks per second
    pub tick_hz: u32,
    /// Maximum undo snapshots
    pub max_undo: usize,
    /// Steps for a full stroke curve
    pub curve_steps: usize,
    /// Steps for the ghost preview curve
    pub ghost_steps: usize,
    /// Dirty tracking tile size in pixels
    pub tile_size: u32,
    /// Seed for the background pattern jitter
    pub background_seed: u64,
    /// Catch-up limit for frame-driven hosts
    pub max_catch_up_ticks: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            margin: DEFAULT_MARGIN,
            tick_hz: DEFAULT_TICK_HZ,
            max_undo: DEFAULT_MAX_UNDO,
            curve_steps: DEFAULT_CURVE_STEPS,
            ghost_steps: DEFAULT_GHOST_STEPS,
            tile_size: DEFAULT_TILE_SIZE,
            background_seed: DEFAULT_BACKGROUND_SEED,
            max_catch_up_ticks: DEFAULT_MAX_CATCH_UP_TICKS,
        }
    }
}

impl EngineConfig {
    /// Create a config for the given canvas size, everything else default
    pub fn new(canvas_size: u32) -> Self {
        Self {
            canvas_size,
            ..Self::default()
        }
    }

    /// Parse a config from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Clamp every field into a range the engine can always honor.
    ///
    /// Out-of-range values are corrected, never rejected.
    pub fn sanitized(self) -> Self {
        let canvas_size = self.canvas_size.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        let half = canvas_size as f64 / 2.0;
        let margin = if self.margin.is_finite() {
            self.margin.clamp(0.0, half - 1.0)
        } else {
            DEFAULT_MARGIN.min(half - 1.0)
        };

        Self {
            canvas_size,
            margin,
            tick_hz: self.tick_hz.clamp(1, MAX_TICK_HZ),
            max_undo: self.max_undo.max(1),
            curve_steps: self.curve_steps.max(1),
            ghost_steps: self.ghost_steps.max(1),
            tile_size: self.tile_size.clamp(8, canvas_size),
            background_seed: self.background_seed,
            max_catch_up_ticks: self.max_catch_up_ticks.max(1),
        }
    }

    /// Canvas size as f64 for curve scaling
    pub fn canvas_size_f64(&self) -> f64 {
        self.canvas_size as f64
    }

    /// Time between two animation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_hz.max(1) as f64)
    }
}
