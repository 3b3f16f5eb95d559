//! Feed presentation types
//!
//! [`FeedSnapshot`] is the read-only view handed to the presentation layer
//! after every state change.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::profile::Profile;
use crate::impl_domain_label_conversions;

/// A swipe decision on the current card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum SwipeDecision {
    Pass,
    Like,
    SuperLike,
}

impl_domain_label_conversions!(SwipeDecision {
    Pass => "pass",
    Like => "like",
    SuperLike => "super_like",
});

/// Point-in-time view of the swipe feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    /// Head of the queue
    pub current_profile: Option<Profile>,
    /// Second entry, pre-rendered behind the current card
    pub next_profile: Option<Profile>,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub queue_len: usize,
    /// A refill is in flight
    pub loading: bool,
    /// A passed profile is held for undo
    pub can_rewind: bool,
    pub boost_active: bool,
    /// Remaining boost time as `MM:SS`
    pub boost_countdown: Option<String>,
    pub filters_active: bool,
}

impl FeedSnapshot {
    /// The card area shows a spinner only while nothing is on screen yet.
    pub const fn show_loading(&self) -> bool {
        self.loading && self.current_profile.is_none()
    }

    /// Pass, like and super-like need a card to act on.
    pub const fn actions_enabled(&self) -> bool {
        !self.show_loading() && self.current_profile.is_some()
    }

    pub const fn rewind_enabled(&self) -> bool {
        self.can_rewind && self.actions_enabled()
    }

    pub const fn boost_enabled(&self) -> bool {
        !self.boost_active && self.actions_enabled()
    }
}
