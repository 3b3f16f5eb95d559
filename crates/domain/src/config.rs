//! Configuration structures
//!
//! Loaded by `inferno_infra::config` from environment variables or a JSON /
//! TOML file. Every field has a default, so a partial file is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BOOST_DURATION_SECS, DEFAULT_BOOST_TICK_INTERVAL_MS, DEFAULT_LOG_LEVEL,
    DEFAULT_LOW_WATERMARK, DEFAULT_REFILL_BATCH_SIZE, DEFAULT_REFILL_LATENCY_MS,
    DEFAULT_REFILL_RETRY_MS, DEFAULT_TEARDOWN_TIMEOUT_MS,
};
use crate::{InfernoError, Result};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub boost: BoostConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Reject values the feed cannot run with.
    ///
    /// # Errors
    /// Returns `InfernoError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.feed.batch_size == 0 {
            return Err(InfernoError::Config("feed.batch_size must be at least 1".into()));
        }
        if self.boost.duration_secs == 0 {
            return Err(InfernoError::Config("boost.duration_secs must be at least 1".into()));
        }
        if self.boost.tick_interval_ms == 0 {
            return Err(InfernoError::Config("boost.tick_interval_ms must be at least 1".into()));
        }
        Ok(())
    }
}

/// Swipe queue refill policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Profiles requested per refill
    pub batch_size: usize,
    /// Auto refill fires when the queue holds this many profiles or fewer
    pub low_watermark: usize,
    /// Delay before a refill lands
    pub refill_latency_ms: u64,
    /// Delay before retrying after a failed refill
    pub refill_retry_ms: u64,
    /// Upper bound on waiting for background tasks at teardown
    pub teardown_timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_REFILL_BATCH_SIZE,
            low_watermark: DEFAULT_LOW_WATERMARK,
            refill_latency_ms: DEFAULT_REFILL_LATENCY_MS,
            refill_retry_ms: DEFAULT_REFILL_RETRY_MS,
            teardown_timeout_ms: DEFAULT_TEARDOWN_TIMEOUT_MS,
        }
    }
}

impl FeedConfig {
    pub const fn refill_latency(&self) -> Duration {
        Duration::from_millis(self.refill_latency_ms)
    }

    pub const fn refill_retry(&self) -> Duration {
        Duration::from_millis(self.refill_retry_ms)
    }

    pub const fn teardown_timeout(&self) -> Duration {
        Duration::from_millis(self.teardown_timeout_ms)
    }
}

/// Boost window timing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    pub duration_secs: u64,
    pub tick_interval_ms: u64,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_BOOST_DURATION_SECS,
            tick_interval_ms: DEFAULT_BOOST_TICK_INTERVAL_MS,
        }
    }
}

impl BoostConfig {
    pub const fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Tracing subscriber settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}
