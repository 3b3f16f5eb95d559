//! # Inferno Infrastructure
//!
//! Runtime side of the swipe feed.
//!
//! This crate contains:
//! - The match queue controller that drives refills and the boost tick on
//!   the tokio runtime
//! - The mock profile source
//! - Configuration loading (environment, JSON, TOML)
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `inferno-core`
//! - Depends on `inferno-common` for clocks and scheduled tasks
//! - Contains all "impure" code (timers, randomness, environment, files)

pub mod config;
pub mod errors;
pub mod feed;
pub mod observability;
pub mod profiles;

// Re-export commonly used items
pub use errors::InfraError;
pub use feed::{ControllerError, ControllerResult, MatchQueueController};
pub use observability::init_tracing;
pub use profiles::MockProfileSource;
