//! Engine notifications for observers (feedback, UI refresh)
//!
//! Observers subscribe and receive events over a channel. Events carry no
//! engine state; observers read [`crate::EngineState`] for that. Delivery is
//! best effort: a disconnected receiver is dropped silently and never
//! affects the engine.

use std::sync::mpsc;

use tracing::trace;

/// Lifecycle events emitted by the drawing engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineEvent {
    /// A stroke began animating
    StrokeStarted,
    /// A stroke finished naturally
    StrokeCompleted,
    /// A stroke was stopped before finishing
    StrokeCancelled,
    /// A snapshot was restored
    Undone,
    /// The canvas was reset to the background
    Cleared,
}

/// Haptic intensity a feedback collaborator should play for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Light,
    Soft,
    Rigid,
}

impl EngineEvent {
    /// Feedback suggested for this event, if any
    pub fn feedback(self) -> Option<Feedback> {
        match self {
            EngineEvent::StrokeCompleted => Some(Feedback::Light),
            EngineEvent::Undone => Some(Feedback::Soft),
            EngineEvent::Cleared => Some(Feedback::Rigid),
            EngineEvent::StrokeStarted | EngineEvent::StrokeCancelled => None,
        }
    }
}

/// Fan-out of engine events to any number of subscribers
#[derive(Debug, Default)]
pub struct EventHub {
    subscribers: Vec<mpsc::Sender<EngineEvent>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber
    pub fn subscribe(&mut self) -> mpsc::Receiver<EngineEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver an event to every live subscriber, pruning disconnected ones
    pub fn emit(&mut self, event: EngineEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
        trace!("emit {:?} to {} subscribers", event, self.subscribers.len());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
