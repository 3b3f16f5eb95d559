//! Testing utilities and helpers
//!
//! - **[`time`]**: Deterministic clock for driving deadlines by hand

pub mod time;

pub use time::MockClock;
