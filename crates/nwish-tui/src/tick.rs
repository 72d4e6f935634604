//! Spinner tick timer.
//!
//! Holds at most one pending tick. The update function asks for the next one
//! with `UpdateAction::ScheduleTick`; when it stops asking, nothing fires.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct TickScheduler {
    due: Option<Instant>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrange a tick `delay` after `now`, replacing any pending one
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// How long the event poll may block: until the pending tick, capped
    /// at `idle`
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.due {
            Some(due) => due.saturating_duration_since(now).min(idle),
            None => idle,
        }
    }

    /// Consume the pending tick if it is due
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
