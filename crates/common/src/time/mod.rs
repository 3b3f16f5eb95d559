//! Time utilities and abstractions
//!
//! This module provides:
//! - **[`clock`]**: Monotonic clock abstraction (system, tokio-aware)
//! - **[`format`]**: Countdown and human-readable duration formatting
//! - **[`timer`]**: One-shot and recurring timers owned by a cancellable group
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use inferno_common::time::{format_countdown, format_duration};
//!
//! assert_eq!(format_countdown(Duration::from_secs(899)), "14:59");
//! assert_eq!(format_duration(Duration::from_secs(900)), "15m 0s");
//! ```

pub mod clock;
pub mod format;
pub mod timer;

// Re-export commonly used items
pub use clock::{Clock, SystemClock, TokioClock};
pub use format::{format_countdown, format_duration};
pub use timer::{ScheduledTasks, ShutdownError, TimerHandle};
