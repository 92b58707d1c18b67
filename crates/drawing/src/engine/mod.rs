//! Drawing engine
//!
//! This module owns the canvas and its undo history and runs the stroke
//! animation state machine:
//! 1. `start_drawing` computes the scaled curve and arms a tick source
//! 2. Each tick composites a batch of segments onto the canvas
//! 3. The stroke ends on completion or on `stop_drawing`
//! 4. `undo` and `clear` operate on full-canvas snapshots
//!
//! Every mutation takes `&mut self`, so calls are serialized and a tick
//! always runs to completion before anything else touches the canvas.

mod history;
mod stroke;

use std::sync::mpsc;
use std::time::Duration;

use glam::DVec2;
use spiro_config::EngineConfig;
use tracing::info;

use crate::background::paint_background;
use crate::canvas::{RasterCanvas, TileCoord};
use crate::curve::{compute_curve, scale_points};
use crate::error::EngineError;
use crate::events::{EngineEvent, EventHub};
use crate::surface::CanvasSnapshot;
use crate::types::{EngineState, MechanismParams};
use crate::undo::UndoStack;

pub use history::UndoEntry;
pub(crate) use stroke::StrokeJob;

/// The spirograph drawing engine
pub struct DrawingEngine {
    /// Sanitized configuration
    pub(crate) config: EngineConfig,
    /// The one live bitmap
    pub(crate) canvas: RasterCanvas,
    /// Background pattern, generated once for this canvas size
    pub(crate) background: CanvasSnapshot,
    /// Full-canvas snapshots, most recent last
    pub(crate) undo_stack: UndoStack<UndoEntry>,
    /// Active stroke (None when idle)
    pub(crate) stroke: Option<StrokeJob>,
    /// Published state
    pub(crate) state: EngineState,
    /// Observer notifications
    pub(crate) events: EventHub,
}

impl DrawingEngine {
    /// Create an engine with a freshly painted background canvas
    ///
    /// Fails only if the raster surface cannot be created.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let config = config.sanitized();
        let mut canvas = RasterCanvas::new(config.canvas_size, config.canvas_size, config.tile_size)?;
        paint_background(&mut canvas, config.background_seed);
        let background = canvas.try_snapshot()?;

        info!(
            "DrawingEngine::new: {}x{} canvas, {} undo levels, {} Hz",
            config.canvas_size, config.canvas_size, config.max_undo, config.tick_hz
        );

        Ok(Self {
            undo_stack: UndoStack::new(config.max_undo),
            config,
            canvas,
            background,
            stroke: None,
            state: EngineState::default(),
            events: EventHub::new(),
        })
    }

    /// Create an engine with default settings for the given canvas size
    pub fn with_canvas_size(canvas_size: u32) -> Result<Self, EngineError> {
        Self::new(EngineConfig::new(canvas_size))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Canvas edge length in pixels
    pub fn canvas_size(&self) -> u32 {
        self.config.canvas_size
    }

    /// Snapshot of the published state
    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    pub fn layer_count(&self) -> usize {
        self.state.layer_count
    }

    pub fn undo_count(&self) -> usize {
        self.state.undo_count
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    /// Owned copy of the current canvas image
    pub fn image(&self) -> image::RgbaImage {
        self.canvas.to_image()
    }

    /// Owned copy of the current canvas pixels
    pub fn snapshot(&self) -> Option<CanvasSnapshot> {
        self.canvas.try_snapshot().ok()
    }

    /// Subscribe to engine events
    pub fn subscribe(&mut self) -> mpsc::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Tiles modified since the last call, for incremental upload
    pub fn take_dirty_tiles(&mut self) -> Vec<TileCoord> {
        self.canvas.take_dirty_tiles()
    }

    /// RGBA8 bytes of one tile
    pub fn tile_bytes(&self, coord: TileCoord) -> Vec<u8> {
        self.canvas.tile_bytes(coord)
    }

    /// Tile size used for dirty tracking
    pub fn tile_size(&self) -> u32 {
        self.canvas.tile_size()
    }

    /// Time between animation ticks
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Preview of the curve `params` would draw, in canvas pixels.
    ///
    /// Uses the coarser ghost resolution and never touches the canvas.
    pub fn ghost_curve(&self, params: MechanismParams) -> Vec<DVec2> {
        let points = compute_curve(params, self.config.ghost_steps);
        scale_points(&points, self.config.canvas_size_f64(), self.config.margin)
    }

    pub(crate) fn sync_undo_count(&mut self) {
        self.state.undo_count = self.undo_stack.len();
    }
}
