// SPDX-License-Identifier: MPL-2.0
//! Last-call-wins debounce.
//!
//! Every [`Debouncer::push`] replaces the pending value and restarts the quiet
//! period; [`Debouncer::poll`] releases the latest value once nothing was
//! pushed for the whole period.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let (_, last) = self.pending.as_ref()?;
        if now.saturating_duration_since(*last) < self.quiet {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(250);

    #[test]
    fn releases_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);
        debouncer.push(800.0_f32, start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(249)), None);
        assert_eq!(debouncer.poll(start + QUIET), Some(800.0));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + QUIET * 4), None);
    }

    #[test]
    fn storms_collapse_to_the_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(QUIET);
        for step in 0..10u64 {
            debouncer.push(step, start + Duration::from_millis(step * 100));
            assert_eq!(
                debouncer.poll(start + Duration::from_millis(step * 100 + 50)),
                None
            );
        }
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(900) + QUIET),
            Some(9)
        );
    }
}
