//! Deadline bookkeeping for the clock and toast lifecycles.
//!
//! The event loop fires due entries from `about_to_wait` and sleeps until
//! the earliest remaining deadline. Entries cannot be cancelled; a toast's
//! hide/remove pair always runs to completion.

use std::time::{Duration, Instant};

use palmview_common::notifications::ToastId;

/// Period of the status-bar clock.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(60);

/// A scheduled wake-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Refresh the clock text and reschedule.
    ClockTick,
    /// Start a toast's fade-out.
    ToastHide(ToastId),
    /// Drop the faded toast element.
    ToastRemove(ToastId),
}

/// An unordered set of pending deadlines.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<(Instant, TimerEvent)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Instant, event: TimerEvent) {
        self.entries.push((at, event));
    }

    /// The earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|(at, _)| *at).min()
    }

    /// Remove and return all entries due at `now`, earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<TimerEvent> {
        let mut due: Vec<(Instant, TimerEvent)> = Vec::new();
        self.entries.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, event)| event).collect()
    }
}
