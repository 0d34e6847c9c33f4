// SPDX-License-Identifier: MPL-2.0
//! Auto-advance timer owned by a single slider.
//!
//! The timer is a deadline rather than a runtime handle: the application's
//! tick subscription polls every armed timer, so restarting only replaces the
//! deadline and cancelling clears it. A slider therefore never has more than
//! one pending firing.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoAdvance {
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoAdvance {
    /// Creates a disarmed timer.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arms the timer so it first fires one interval after `now`.
    ///
    /// Any previous deadline is discarded.
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` if the deadline has passed, and schedules the next one.
    ///
    /// Fires at most once per call. Periods missed while the application was
    /// not ticking are skipped instead of replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let next = deadline + self.interval;
        self.deadline = Some(if next > now { next } else { now + self.interval });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(3000);

    #[test]
    fn new_timer_is_disarmed_and_never_fires() {
        let mut timer = AutoAdvance::new(INTERVAL);
        assert!(!timer.is_armed());
        assert!(!timer.poll(Instant::now() + INTERVAL * 10));
    }

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = AutoAdvance::new(INTERVAL);
        timer.restart(start);

        assert!(!timer.poll(start + Duration::from_millis(2999)));
        assert!(timer.poll(start + INTERVAL));
        assert!(!timer.poll(start + INTERVAL + Duration::from_millis(100)));
        assert!(timer.poll(start + INTERVAL * 2));
    }

    #[test]
    fn restart_pushes_deadline_back() {
        let start = Instant::now();
        let mut timer = AutoAdvance::new(INTERVAL);
        timer.restart(start);

        let reset_at = start + Duration::from_millis(2500);
        timer.restart(reset_at);

        assert!(!timer.poll(start + INTERVAL));
        assert!(timer.poll(reset_at + INTERVAL));
    }

    #[test]
    fn cancel_stops_firing() {
        let start = Instant::now();
        let mut timer = AutoAdvance::new(INTERVAL);
        timer.restart(start);
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.poll(start + INTERVAL * 5));
    }

    #[test]
    fn missed_periods_are_skipped() {
        let start = Instant::now();
        let mut timer = AutoAdvance::new(INTERVAL);
        timer.restart(start);

        let late = start + INTERVAL * 10;
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.deadline(), Some(late + INTERVAL));
    }
}
