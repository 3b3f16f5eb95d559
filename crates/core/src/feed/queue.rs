//! Ordered candidate queue with single-level undo
//!
//! The head of the queue is the card on screen. Decisions consume the head;
//! refills append to the tail. Only the most recent pass can be undone.
//!
//! Invariants:
//! - no identifier appears twice in the queue
//! - the identifier held for undo never appears in the queue
//! - at most one refill is in flight

use std::collections::{HashSet, VecDeque};

use inferno_domain::{Profile, ProfileId, SwipeDecision};

/// Token identifying one in-flight refill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RefillTicket(u64);

/// Result of appending a refill batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendReport {
    /// Profiles added to the tail
    pub appended: usize,
    /// Profiles skipped because their id was already queued or held for undo
    pub duplicates: usize,
}

/// Ordered swipe queue with single-level undo and refill tracking
#[derive(Debug, Default)]
pub struct MatchQueue {
    profiles: VecDeque<Profile>,
    queued_ids: HashSet<ProfileId>,
    last_passed: Option<Profile>,
    in_flight: Option<RefillTicket>,
    issued_tickets: u64,
}

impl MatchQueue {
    /// Empty queue with nothing in flight
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile is queued
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Card currently on screen
    pub fn current(&self) -> Option<&Profile> {
        self.profiles.front()
    }

    /// Card rendered behind the current one
    pub fn next_up(&self) -> Option<&Profile> {
        self.profiles.get(1)
    }

    /// Queued profiles from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    /// Queued ids from head to tail
    pub fn ids(&self) -> Vec<ProfileId> {
        self.profiles.iter().map(|profile| profile.id).collect()
    }

    /// Whether `id` is currently queued
    pub fn contains(&self, id: &ProfileId) -> bool {
        self.queued_ids.contains(id)
    }

    /// Profile held for undo, if the last decision was a pass
    pub fn last_passed(&self) -> Option<&Profile> {
        self.last_passed.as_ref()
    }

    /// Whether a rewind would restore a profile
    pub fn can_rewind(&self) -> bool {
        self.last_passed.is_some()
    }

    /// Whether a refill is in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Ticket of the refill currently in flight
    pub fn pending_refill(&self) -> Option<RefillTicket> {
        self.in_flight
    }

    /// Apply a decision to the head. Returns the consumed profile, or `None`
    /// when the queue is empty.
    pub fn decide(&mut self, decision: SwipeDecision) -> Option<Profile> {
        let head = self.profiles.pop_front()?;
        self.queued_ids.remove(&head.id);

        self.last_passed = match decision {
            SwipeDecision::Pass => Some(head.clone()),
            SwipeDecision::Like | SwipeDecision::SuperLike => None,
        };

        Some(head)
    }

    /// Pass on the head and hold it for undo
    pub fn pass(&mut self) -> Option<Profile> {
        self.decide(SwipeDecision::Pass)
    }

    /// Like the head; clears the undo slot
    pub fn like(&mut self) -> Option<Profile> {
        self.decide(SwipeDecision::Like)
    }

    /// Super-like the head; clears the undo slot
    pub fn super_like(&mut self) -> Option<Profile> {
        self.decide(SwipeDecision::SuperLike)
    }

    /// Put the last passed profile back at the head. No-op when nothing is
    /// held for undo.
    pub fn rewind(&mut self) -> Option<ProfileId> {
        let restored = self.last_passed.take()?;
        let id = restored.id;
        self.queued_ids.insert(id);
        self.profiles.push_front(restored);
        Some(id)
    }

    /// Mark a refill as in flight. Returns `None` while another refill is
    /// still pending.
    pub fn begin_refill(&mut self) -> Option<RefillTicket> {
        if self.in_flight.is_some() {
            return None;
        }

        self.issued_tickets += 1;
        let ticket = RefillTicket(self.issued_tickets);
        self.in_flight = Some(ticket);
        Some(ticket)
    }

    /// Append a refill batch to the tail and clear the in-flight marker.
    ///
    /// Returns `None` if `ticket` is not the refill currently in flight; the
    /// batch is dropped in that case.
    pub fn complete_refill(
        &mut self,
        ticket: RefillTicket,
        batch: Vec<Profile>,
    ) -> Option<AppendReport> {
        if self.in_flight != Some(ticket) {
            return None;
        }
        self.in_flight = None;

        let held_id = self.last_passed.as_ref().map(|profile| profile.id);
        let mut report = AppendReport::default();

        for profile in batch {
            if held_id == Some(profile.id) || !self.queued_ids.insert(profile.id) {
                report.duplicates += 1;
                continue;
            }
            self.profiles.push_back(profile);
            report.appended += 1;
        }

        Some(report)
    }

    /// Clear the in-flight marker without touching the queue.
    pub fn abort_refill(&mut self, ticket: RefillTicket) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        true
    }

    /// Whether the queue has dropped to `low_watermark` with no refill
    /// pending.
    pub fn needs_refill(&self, low_watermark: usize) -> bool {
        !self.is_loading() && self.profiles.len() <= low_watermark
    }
}
