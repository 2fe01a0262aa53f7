//! Settle-timer primitive for search inputs.
//!
//! Instead of firing a request per keystroke, the raw input is pushed into a
//! [`Debounced`] value and the controller polls it on its tick; the value is
//! yielded once, after the delay has elapsed with no further writes, so a
//! burst of edits collapses into a single fetch with the final text.

use std::time::{Duration, Instant};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct Debounced<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounced<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a new value, restarting the settle timer.
    pub fn set(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Yields the pending value once `delay` has passed since the last
    /// `set`. Subsequent polls return `None` until the next write.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, written_at)) if now.duration_since(*written_at) >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Yields the pending value immediately, if any.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debounced<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}
