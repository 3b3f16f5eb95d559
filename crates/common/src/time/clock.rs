//! Clock abstraction for testability
//!
//! Everything that compares "now" against a deadline reads time through
//! [`Clock`] so tests can substitute a deterministic source.

use std::time::Instant;

/// Trait for time operations to enable testing
pub trait Clock: Send + Sync {
    /// Get current instant (monotonic time)
    fn now(&self) -> Instant;
}

/// Real system clock implementation
///
/// # Examples
///
/// ```
/// use inferno_common::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let first = clock.now();
/// assert!(clock.now() >= first);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock backed by the tokio timer.
///
/// Follows tokio's virtual time when the runtime is paused, so deadlines
/// computed from it agree with `tokio::time::sleep` and `interval` in tests
/// that use `start_paused`. Outside a paused runtime it behaves like
/// [`SystemClock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}
