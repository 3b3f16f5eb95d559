//! Port interfaces for the swipe feed
//!
//! These traits define the boundaries between core feed logic and the
//! implementations that synthesise or fetch candidate profiles.

use inferno_domain::{Profile, Result};

/// Source of fresh candidate profiles
///
/// Implementations must return profiles with globally unique identifiers.
/// The feed still filters duplicates on append, but does not retry or pad a
/// short batch.
pub trait ProfileSource: Send + Sync {
    /// Synthesise or fetch `count` profiles
    fn generate(&self, count: usize) -> Result<Vec<Profile>>;
}
