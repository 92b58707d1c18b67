use serde::{Deserialize, Serialize};

use crate::color::ColorMode;
use crate::constants::{MAX_LINE_WIDTH, MIN_INNER_RADIUS, MIN_LINE_WIDTH, MIN_OUTER_RADIUS};

/// Mechanical parameters of a hypotrochoid (outer ring, rolling wheel, pen)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MechanismParams {
    /// Outer ring radius R
    pub outer_radius: f64,
    /// Rolling wheel radius r
    pub inner_radius: f64,
    /// Pen offset d from the wheel centre
    pub pen_offset: f64,
}

impl MechanismParams {
    pub const fn new(outer_radius: f64, inner_radius: f64, pen_offset: f64) -> Self {
        Self {
            outer_radius,
            inner_radius,
            pen_offset,
        }
    }

    /// Return params that are always renderable.
    ///
    /// Any positive R is kept; non-finite or non-positive R becomes 1.
    /// r is clamped into [1, R-1] (never below 1, even when R-1 < 1) and d
    /// is floored at 0.
    pub fn sanitized(self) -> Self {
        let outer_radius = if self.outer_radius.is_finite() && self.outer_radius > 0.0 {
            self.outer_radius
        } else {
            MIN_OUTER_RADIUS
        };
        let inner_radius = if self.inner_radius.is_finite() {
            self.inner_radius.min(outer_radius - 1.0).max(MIN_INNER_RADIUS)
        } else {
            (outer_radius - 1.0).max(MIN_INNER_RADIUS)
        };
        let pen_offset = if self.pen_offset.is_finite() {
            self.pen_offset.max(0.0)
        } else {
            0.0
        };

        Self {
            outer_radius,
            inner_radius,
            pen_offset,
        }
    }

    /// Effective rolling radius after clamping
    pub fn effective_inner_radius(&self) -> f64 {
        self.sanitized().inner_radius
    }
}

impl Default for MechanismParams {
    fn default() -> Self {
        Self::new(150.0, 80.0, 100.0)
    }
}

/// How a stroke is animated and painted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Segments composited per tick (0 is treated as 1)
    pub speed: u32,
    /// Line width in pixels
    pub line_width: f32,
    /// Segment coloring
    pub color_mode: ColorMode,
}

impl StrokeStyle {
    pub fn new(speed: u32, line_width: f32, color_mode: ColorMode) -> Self {
        Self {
            speed,
            line_width,
            color_mode,
        }
    }

    /// Segments per tick, at least one
    pub fn segments_per_tick(&self) -> usize {
        self.speed.max(1) as usize
    }

    /// Line width clamped into the drawable range
    pub fn clamped_line_width(&self) -> f32 {
        if self.line_width.is_finite() {
            self.line_width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH)
        } else {
            MIN_LINE_WIDTH
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(5, 1.0, ColorMode::default())
    }
}

/// Published engine state, read as a consistent snapshot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineState {
    /// A stroke is being animated
    pub is_drawing: bool,
    /// Fraction of the current (or last completed) stroke drawn, 0..=1
    pub progress: f64,
    /// Strokes composited since the last clear
    pub layer_count: usize,
    /// Snapshots available for undo
    pub undo_count: usize,
}

impl EngineState {
    pub fn can_undo(&self) -> bool {
        self.undo_count > 0
    }
}

/// Result of a `start_drawing` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new stroke began animating
    Started { segments: usize },
    /// A stroke was already running and has been cancelled instead
    Cancelled,
}
