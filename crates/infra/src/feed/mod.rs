//! Swipe feed runtime
//!
//! [`MatchQueueController`] wraps the pure `FeedService` with the timers the
//! feed needs: delayed refill completion, retry after a failed refill, and
//! the recurring boost tick.

pub mod controller;
pub mod error;

pub use controller::MatchQueueController;
pub use error::{ControllerError, ControllerResult};
