// SPDX-License-Identifier: MPL-2.0
//! Autoplay timer.
//!
//! A single repeating, deadline-based timer. The host calls [`Autoplay::poll`]
//! on every tick; at most one timer exists at a time because [`Autoplay::start`]
//! always cancels the previous one first.

use std::time::{Duration, Instant};

/// Opaque identity of a started timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Timer {
    handle: TimerHandle,
    next_due: Instant,
}

#[derive(Debug, Clone)]
pub struct Autoplay {
    interval: Duration,
    timer: Option<Timer>,
    next_handle: u64,
}

impl Autoplay {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            timer: None,
            next_handle: 0,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Cancels any running timer and starts a fresh countdown.
    pub fn start(&mut self, now: Instant) -> TimerHandle {
        self.cancel();
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timer = Some(Timer {
            handle,
            next_due: now + self.interval,
        });
        handle
    }

    pub fn cancel(&mut self) {
        self.timer = None;
    }

    #[must_use]
    pub fn handle(&self) -> Option<TimerHandle> {
        self.timer.map(|timer| timer.handle)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Returns `true` when the timer fired since the last poll.
    ///
    /// Missed intervals (a stalled host) collapse into a single firing; the
    /// next deadline stays on the same cadence.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if now < timer.next_due {
            return false;
        }
        while timer.next_due <= now {
            timer.next_due += self.interval;
        }
        true
    }
}
