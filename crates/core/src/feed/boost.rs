//! Boost window state machine
//!
//! `Inactive -> Active -> Inactive`. Activation is explicit; deactivation
//! happens only when a tick observes that the window has run out. The end
//! instant and the exposed countdown are cleared in that same tick, so an
//! observer never sees an active boost without a countdown or vice versa.

use std::time::{Duration, Instant};

use inferno_common::time::format_countdown;

/// What a tick observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoostTick {
    /// No boost running
    Inactive,
    /// Boost still running
    Active { remaining: Duration },
    /// This tick ended the boost
    Expired,
}

#[derive(Debug, Clone)]
pub struct BoostWindow {
    duration: Duration,
    ends_at: Option<Instant>,
    countdown: Option<String>,
}

impl BoostWindow {
    pub fn new(duration: Duration) -> Self {
        Self { duration, ends_at: None, countdown: None }
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub const fn is_active(&self) -> bool {
        self.ends_at.is_some()
    }

    pub const fn ends_at(&self) -> Option<Instant> {
        self.ends_at
    }

    /// Countdown as of the last activation or tick
    pub fn countdown(&self) -> Option<&str> {
        self.countdown.as_deref()
    }

    /// Start the window at `now`. Returns `false` without changing anything
    /// if a boost is already running.
    pub fn activate(&mut self, now: Instant) -> bool {
        if self.is_active() {
            return false;
        }

        self.ends_at = Some(now + self.duration);
        self.countdown = Some(format_countdown(self.duration));
        true
    }

    /// Observe the window at `now`, refreshing the countdown or ending the
    /// boost once `now` reaches the end instant.
    pub fn tick(&mut self, now: Instant) -> BoostTick {
        let Some(ends_at) = self.ends_at else {
            return BoostTick::Inactive;
        };

        if now >= ends_at {
            self.ends_at = None;
            self.countdown = None;
            return BoostTick::Expired;
        }

        let remaining = ends_at - now;
        self.countdown = Some(format_countdown(remaining));
        BoostTick::Active { remaining }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIFTEEN_MINUTES: Duration = Duration::from_secs(15 * 60);

    #[test]
    fn activation_exposes_full_countdown() {
        let mut boost = BoostWindow::new(FIFTEEN_MINUTES);
        let now = Instant::now();

        assert!(boost.activate(now));
        assert!(boost.is_active());
        assert_eq!(boost.countdown(), Some("15:00"));
        assert_eq!(boost.ends_at(), Some(now + FIFTEEN_MINUTES));
    }

    #[test]
    fn activation_while_active_is_noop() {
        let mut boost = BoostWindow::new(FIFTEEN_MINUTES);
        let start = Instant::now();
        boost.activate(start);

        assert!(!boost.activate(start + Duration::from_secs(60)));
        assert_eq!(boost.ends_at(), Some(start + FIFTEEN_MINUTES));
    }

    #[test]
    fn tick_counts_down() {
        let mut boost = BoostWindow::new(FIFTEEN_MINUTES);
        let start = Instant::now();
        boost.activate(start);

        let tick = boost.tick(start + Duration::from_secs(61));
        assert_eq!(tick, BoostTick::Active { remaining: Duration::from_secs(839) });
        assert_eq!(boost.countdown(), Some("13:59"));
    }

    #[test]
    fn one_second_before_expiry_is_still_active() {
        let mut boost = BoostWindow::new(FIFTEEN_MINUTES);
        let start = Instant::now();
        boost.activate(start);

        boost.tick(start + FIFTEEN_MINUTES - Duration::from_secs(1));
        assert!(boost.is_active());
        assert_eq!(boost.countdown(), Some("00:01"));
    }

    #[test]
    fn expiry_clears_state_in_one_tick() {
        let mut boost = BoostWindow::new(FIFTEEN_MINUTES);
        let start = Instant::now();
        boost.activate(start);

        assert_eq!(boost.tick(start + FIFTEEN_MINUTES), BoostTick::Expired);
        assert!(!boost.is_active());
        assert_eq!(boost.countdown(), None);
        assert_eq!(boost.ends_at(), None);

        assert_eq!(boost.tick(start + FIFTEEN_MINUTES * 2), BoostTick::Inactive);
    }

    #[test]
    fn can_reactivate_after_expiry() {
        let mut boost = BoostWindow::new(FIFTEEN_MINUTES);
        let start = Instant::now();
        boost.activate(start);
        boost.tick(start + FIFTEEN_MINUTES);

        assert!(boost.activate(start + FIFTEEN_MINUTES));
    }
}
