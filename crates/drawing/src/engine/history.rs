//! Undo history and canvas reset

use tracing::{debug, info, warn};

use crate::events::EngineEvent;
use crate::surface::CanvasSnapshot;

use super::DrawingEngine;

/// One undo level: the canvas and layer count before a mutation
#[derive(Debug, Clone)]
pub struct UndoEntry {
    pub snapshot: CanvasSnapshot,
    pub layer_count: usize,
}

impl DrawingEngine {
    /// Save the current canvas and layer count as an undo level.
    ///
    /// The oldest level is evicted once the stack is full. If the copy
    /// cannot be allocated, nothing is pushed and the canvas is untouched.
    pub fn push_undo(&mut self) {
        let snapshot = match self.canvas.try_snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("push_undo: snapshot failed, skipping: {}", e);
                return;
            }
        };

        let entry = UndoEntry {
            snapshot,
            layer_count: self.state.layer_count,
        };
        if self.undo_stack.push(entry).is_some() {
            debug!("push_undo: evicted oldest level");
        }
        self.sync_undo_count();
    }

    /// Restore the most recent undo level.
    ///
    /// Stops any running stroke first. The layer count is restored to the
    /// value saved with the level rather than decremented: undoing a stroke
    /// drops it by one, undoing a clear brings the cleared layers back, and
    /// a bare `push_undo(); undo();` leaves it unchanged. Returns false when
    /// there is nothing to undo, in which case no state changes.
    pub fn undo(&mut self) -> bool {
        if self.undo_stack.is_empty() {
            debug!("undo: history empty");
            return false;
        }

        self.stop_drawing();

        let Some(entry) = self.undo_stack.pop() else {
            return false;
        };
        if let Err(e) = self.canvas.restore(&entry.snapshot) {
            warn!("undo: restore failed: {}", e);
        }
        self.state.layer_count = entry.layer_count;
        self.sync_undo_count();

        info!(
            "undo: {} layers, {} levels left",
            self.state.layer_count, self.state.undo_count
        );
        self.events.emit(EngineEvent::Undone);
        true
    }

    /// Reset the canvas to the background pattern.
    ///
    /// The pre-clear canvas is pushed first so the clear can be undone. A
    /// running stroke is cancelled, so observers see `StrokeCancelled`
    /// before `Cleared`.
    pub fn clear(&mut self) {
        self.push_undo();
        self.stop_drawing();

        if let Err(e) = self.canvas.restore(&self.background) {
            warn!("clear: restore failed: {}", e);
        }
        self.state.layer_count = 0;
        self.state.progress = 0.0;

        info!("clear: canvas reset to background");
        self.events.emit(EngineEvent::Cleared);
    }
}
