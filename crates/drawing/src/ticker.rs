//! Fixed-rate cooperative tick source
//!
//! The ticker never sleeps or spawns anything. A host polls it with the
//! current time and runs as many ticks as are due. Dropping the ticker is
//! the cancellation: nothing outlives it.

use std::time::{Duration, Instant};

/// Fixed-rate schedule with bounded catch-up
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    max_catch_up: u32,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Create a ticker firing every `interval` (at least 1ns)
    pub fn new(interval: Duration, max_catch_up: u32) -> Self {
        Self {
            interval: interval.max(Duration::from_nanos(1)),
            max_catch_up: max_catch_up.max(1),
            next_due: None,
        }
    }

    /// Create a ticker firing `hz` times per second
    pub fn from_hz(hz: u32, max_catch_up: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / hz.max(1) as f64), max_catch_up)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks due at `now`.
    ///
    /// The first poll anchors the schedule and fires nothing; the first tick
    /// is due one interval later. If the host stalled for longer than the
    /// catch-up limit, the backlog is dropped and the schedule restarts
    /// from `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(next_due) = self.next_due else {
            self.next_due = Some(now + self.interval);
            return 0;
        };
        if now < next_due {
            return 0;
        }

        let behind = now.duration_since(next_due).as_nanos() / self.interval.as_nanos();
        let due = behind.saturating_add(1);

        if due > self.max_catch_up as u128 {
            self.next_due = Some(now + self.interval);
            self.max_catch_up
        } else {
            let due = due as u32;
            self.next_due = Some(next_due + self.interval * due);
            due
        }
    }

    /// Time left until the next tick is due, zero if overdue.
    /// None before the first poll.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|next| next.saturating_duration_since(now))
    }
}
