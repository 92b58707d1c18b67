//! Stroke animation for the drawing engine

use std::time::{Duration, Instant};

use glam::DVec2;
use tracing::{debug, info};

use crate::color::ColorMode;
use crate::curve::{compute_curve, scale_points};
use crate::events::EngineEvent;
use crate::ticker::Ticker;
use crate::types::{MechanismParams, StartOutcome, StrokeStyle};

use super::DrawingEngine;

/// Transient state of the stroke being animated
///
/// Dropping the job drops its ticker, so no tick can fire for it afterwards.
pub(crate) struct StrokeJob {
    /// Curve in canvas pixels
    points: Vec<DVec2>,
    /// Next point to connect; segment `cursor - 1 -> cursor` is drawn next
    cursor: usize,
    color_mode: ColorMode,
    line_width: f32,
    segments_per_tick: usize,
    ticker: Ticker,
}

impl StrokeJob {
    fn total_segments(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    fn is_finished(&self) -> bool {
        self.cursor >= self.points.len()
    }

    /// Segments drawn so far over total segments
    fn progress(&self) -> f64 {
        let total = self.total_segments();
        if total == 0 {
            return 1.0;
        }
        (self.cursor.saturating_sub(1) as f64 / total as f64).min(1.0)
    }
}

impl DrawingEngine {
    /// Begin a stroke, or cancel the running one.
    ///
    /// When idle, the current canvas is pushed for undo, the curve is
    /// computed and scaled, and ticking begins. When a stroke is already
    /// running, this call only stops it; the partial stroke stays on the
    /// canvas and no new stroke is started.
    pub fn start_drawing(&mut self, params: MechanismParams, style: StrokeStyle) -> StartOutcome {
        if self.stroke.is_some() {
            debug!("start_drawing while drawing: cancelling current stroke");
            self.stop_drawing();
            return StartOutcome::Cancelled;
        }

        self.push_undo();

        let raw = compute_curve(params, self.config.curve_steps);
        let points = scale_points(&raw, self.config.canvas_size_f64(), self.config.margin);
        let segments = points.len().saturating_sub(1);

        info!(
            "start_drawing: R={:.1} r={:.1} d={:.1}, {} segments at {} per tick",
            params.outer_radius,
            params.inner_radius,
            params.pen_offset,
            segments,
            style.segments_per_tick()
        );

        self.stroke = Some(StrokeJob {
            points,
            cursor: 1,
            color_mode: style.color_mode,
            line_width: style.clamped_line_width(),
            segments_per_tick: style.segments_per_tick(),
            ticker: Ticker::from_hz(self.config.tick_hz, self.config.max_catch_up_ticks),
        });
        self.state.is_drawing = true;
        self.state.progress = 0.0;
        self.state.layer_count += 1;
        self.events.emit(EngineEvent::StrokeStarted);

        StartOutcome::Started { segments }
    }

    /// Run one animation tick.
    ///
    /// Composites the next batch of segments and updates progress. Returns
    /// true while the stroke is still running afterwards; false when idle or
    /// when this tick finished the stroke.
    pub fn tick(&mut self) -> bool {
        let Some(job) = self.stroke.as_mut() else {
            return false;
        };

        let total_segments = job.total_segments();
        let start = job.cursor;
        let end = (start + job.segments_per_tick).min(job.points.len());

        if start < end {
            for (offset, pair) in job.points[start - 1..end].windows(2).enumerate() {
                let color = job.color_mode.resolve(start - 1 + offset, total_segments);
                self.canvas.draw_segment(pair[0], pair[1], job.line_width, color);
            }
        }
        job.cursor = end.max(start);

        let progress = job.progress();
        let finished = job.is_finished();
        self.state.progress = self.state.progress.max(progress);

        debug!(
            "tick: segments {}..{} of {}, progress {:.3}",
            start.saturating_sub(1),
            end.saturating_sub(1),
            total_segments,
            self.state.progress
        );

        if finished {
            self.finish_drawing();
            return false;
        }
        true
    }

    /// Run every tick that is due at `now` and return how many ran.
    ///
    /// For hosts driven by frame callbacks or a timer of their own; the
    /// stroke's ticker keeps the fixed rate and bounds catch-up.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let due = match self.stroke.as_mut() {
            Some(job) => job.ticker.poll(now),
            None => return 0,
        };

        let mut ran = 0;
        for _ in 0..due {
            if self.stroke.is_none() {
                break;
            }
            self.tick();
            ran += 1;
        }
        ran
    }

    /// Time until the next tick is due, None when idle.
    ///
    /// Before the first `advance` the schedule is not anchored yet and a
    /// full interval is reported.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.stroke.as_ref().map(|job| {
            job.ticker
                .time_until_next(now)
                .unwrap_or_else(|| job.ticker.interval())
        })
    }

    /// Cancel the running stroke.
    ///
    /// The tick source is dropped before this returns; segments already
    /// composited stay on the canvas. A no-op when idle.
    pub fn stop_drawing(&mut self) {
        let Some(job) = self.stroke.take() else {
            return;
        };

        info!(
            "stop_drawing: cancelled at segment {} of {}",
            job.cursor.saturating_sub(1),
            job.total_segments()
        );
        self.state.is_drawing = false;
        self.state.progress = 0.0;
        self.events.emit(EngineEvent::StrokeCancelled);
    }

    /// Natural completion: the whole curve is on the canvas
    fn finish_drawing(&mut self) {
        self.stroke = None;
        self.state.is_drawing = false;
        self.state.progress = 1.0;
        info!("stroke completed, {} layers", self.state.layer_count);
        self.events.emit(EngineEvent::StrokeCompleted);
    }
}
