//! # Inferno Core
//!
//! Pure feed logic - no runtime or infrastructure dependencies.
//!
//! This crate contains:
//! - The swipe queue with single-level undo
//! - The boost window state machine
//! - The feed service that ties both to a profile source
//!
//! ## Architecture Principles
//! - Only depends on `inferno-common` and `inferno-domain`
//! - Profile generation comes in through the [`ProfileSource`] port
//! - Time comes in through the `Clock` trait; nothing here sleeps or spawns

pub mod feed;

// Re-export specific items to avoid ambiguity
pub use feed::boost::{BoostTick, BoostWindow};
pub use feed::ports::ProfileSource;
pub use feed::queue::{AppendReport, MatchQueue, RefillTicket};
pub use feed::service::{FeedService, RefillOutcome};
