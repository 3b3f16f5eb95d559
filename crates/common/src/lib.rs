//! Modular common utilities shared across Inferno crates.
//!
//! # Feature Tiers
//!
//! - `runtime` (default): clocks, countdown formatting, cancellable timers
//! - `test-utils`: deterministic clocks for tests in downstream crates

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod time;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(all(feature = "runtime", any(feature = "test-utils", test)))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use time::{
    format_countdown, Clock, ScheduledTasks, ShutdownError, SystemClock, TimerHandle, TokioClock,
};
