//! Feed service - core swipe feed business logic
//!
//! Owns the queue, the boost window and the filter toggle, and talks to the
//! profile source. It never sleeps or spawns: the caller decides when a
//! refill completes and when the boost is ticked.

use std::sync::Arc;

use inferno_common::time::{format_duration, Clock};
use inferno_domain::{
    BoostConfig, FeedConfig, FeedSnapshot, InfernoError, Profile, ProfileId, SwipeDecision,
};
use tracing::{debug, info, warn};

use super::boost::{BoostTick, BoostWindow};
use super::ports::ProfileSource;
use super::queue::{MatchQueue, RefillTicket};

/// How a refill ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefillOutcome {
    /// The full batch arrived
    Completed { appended: usize, duplicates: usize },
    /// The source returned fewer profiles than requested
    Partial { requested: usize, received: usize, appended: usize, duplicates: usize },
    /// The source failed; the queue is unchanged
    Failed(InfernoError),
    /// The ticket no longer matches the refill in flight
    Stale,
}

impl RefillOutcome {
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Swipe feed service
pub struct FeedService {
    queue: MatchQueue,
    boost: BoostWindow,
    filters_active: bool,
    source: Arc<dyn ProfileSource>,
    clock: Arc<dyn Clock>,
    config: FeedConfig,
}

impl FeedService {
    /// Create a feed with an empty queue and no boost
    pub fn new(
        source: Arc<dyn ProfileSource>,
        clock: Arc<dyn Clock>,
        config: FeedConfig,
        boost: &BoostConfig,
    ) -> Self {
        Self {
            queue: MatchQueue::new(),
            boost: BoostWindow::new(boost.duration()),
            filters_active: false,
            source,
            clock,
            config,
        }
    }

    pub const fn queue(&self) -> &MatchQueue {
        &self.queue
    }

    pub const fn boost(&self) -> &BoostWindow {
        &self.boost
    }

    pub const fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub const fn filters_active(&self) -> bool {
        self.filters_active
    }

    /// Apply a swipe decision to the current card
    pub fn decide(&mut self, decision: SwipeDecision) -> Option<Profile> {
        let consumed = self.queue.decide(decision);
        match &consumed {
            Some(profile) => {
                debug!(%decision, profile_id = %profile.id, remaining = self.queue.len(), "swipe decision applied");
            }
            None => debug!(%decision, "swipe decision ignored on empty queue"),
        }
        consumed
    }

    pub fn pass(&mut self) -> Option<Profile> {
        self.decide(SwipeDecision::Pass)
    }

    pub fn like(&mut self) -> Option<Profile> {
        self.decide(SwipeDecision::Like)
    }

    /// Identical to [`Self::like`] at the queue layer
    pub fn super_like(&mut self) -> Option<Profile> {
        self.decide(SwipeDecision::SuperLike)
    }

    /// Undo the most recent pass
    pub fn rewind(&mut self) -> Option<ProfileId> {
        let restored = self.queue.rewind();
        if let Some(id) = restored {
            debug!(profile_id = %id, "rewound last pass");
        }
        restored
    }

    /// Mark a refill as in flight. `None` while one is already pending.
    pub fn request_refill(&mut self) -> Option<RefillTicket> {
        let ticket = self.queue.begin_refill();
        match ticket {
            Some(_) => debug!(queue_len = self.queue.len(), "refill requested"),
            None => debug!("refill already in flight"),
        }
        ticket
    }

    /// Whether an auto refill should fire now
    pub fn should_auto_refill(&self) -> bool {
        self.queue.needs_refill(self.config.low_watermark)
    }

    /// Request a refill iff the queue is at or below the low watermark and
    /// nothing is in flight.
    pub fn maybe_auto_refill(&mut self) -> Option<RefillTicket> {
        if self.should_auto_refill() {
            self.request_refill()
        } else {
            None
        }
    }

    /// Pull a batch from the source and append it for `ticket`.
    pub fn complete_refill(&mut self, ticket: RefillTicket) -> RefillOutcome {
        if self.queue.pending_refill() != Some(ticket) {
            return RefillOutcome::Stale;
        }

        let requested = self.config.batch_size;
        let batch = match self.source.generate(requested) {
            Ok(batch) => batch,
            Err(err) => {
                if !self.queue.abort_refill(ticket) {
                    return RefillOutcome::Stale;
                }
                warn!(error = %err, queue_len = self.queue.len(), "profile refill failed");
                return RefillOutcome::Failed(err);
            }
        };

        let received = batch.len();
        let Some(report) = self.queue.complete_refill(ticket, batch) else {
            return RefillOutcome::Stale;
        };

        if report.duplicates > 0 {
            warn!(duplicates = report.duplicates, "dropped profiles with duplicate ids");
        }

        if received < requested {
            warn!(
                requested,
                received,
                appended = report.appended,
                "profile source returned a short batch"
            );
            RefillOutcome::Partial {
                requested,
                received,
                appended: report.appended,
                duplicates: report.duplicates,
            }
        } else {
            info!(
                appended = report.appended,
                queue_len = self.queue.len(),
                "profile refill completed"
            );
            RefillOutcome::Completed { appended: report.appended, duplicates: report.duplicates }
        }
    }

    /// Drop the refill in flight without calling the source
    pub fn cancel_refill(&mut self, ticket: RefillTicket) -> bool {
        self.queue.abort_refill(ticket)
    }

    /// Start a boost. `false` while one is already running.
    pub fn activate_boost(&mut self) -> bool {
        let activated = self.boost.activate(self.clock.now());
        if activated {
            info!(duration = %format_duration(self.boost.duration()), "boost activated");
        }
        activated
    }

    /// Observe the boost window at the current time
    pub fn tick_boost(&mut self) -> BoostTick {
        let tick = self.boost.tick(self.clock.now());
        if tick == BoostTick::Expired {
            info!("boost expired");
        }
        tick
    }

    /// Flip the filter indicator; returns the new value
    pub fn toggle_filters(&mut self) -> bool {
        self.filters_active = !self.filters_active;
        debug!(filters_active = self.filters_active, "filters toggled");
        self.filters_active
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            current_profile: self.queue.current().cloned(),
            next_profile: self.queue.next_up().cloned(),
            queue_len: self.queue.len(),
            loading: self.queue.is_loading(),
            can_rewind: self.queue.can_rewind(),
            boost_active: self.boost.is_active(),
            boost_countdown: self.boost.countdown().map(str::to_owned),
            filters_active: self.filters_active,
        }
    }
}
