//! Application constants
//!
//! Centralized location for the domain-level defaults used throughout the
//! feed. Every value here can be overridden through [`crate::Config`].

// Feed queue
pub const DEFAULT_REFILL_BATCH_SIZE: usize = 8;
pub const DEFAULT_LOW_WATERMARK: usize = 3;
pub const DEFAULT_REFILL_LATENCY_MS: u64 = 350; // Simulated network round-trip
pub const DEFAULT_REFILL_RETRY_MS: u64 = 2_000;
pub const DEFAULT_TEARDOWN_TIMEOUT_MS: u64 = 1_000;

// Boost window
pub const DEFAULT_BOOST_DURATION_SECS: u64 = 15 * 60;
pub const DEFAULT_BOOST_TICK_INTERVAL_MS: u64 = 1_000;

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
