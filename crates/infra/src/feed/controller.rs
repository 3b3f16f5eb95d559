//! Match queue controller with explicit lifecycle management.
//!
//! Owns the swipe feed state and every background task that touches it.
//! All mutations go through one lock, so decisions, refill completions and
//! boost ticks are totally ordered. Timer callbacks hold a weak reference to
//! the shared state and are owned by a single [`ScheduledTasks`] group;
//! [`MatchQueueController::teardown`] cancels the group and waits for it, so
//! nothing mutates the feed once teardown returns.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use inferno_domain::Config;
//! use inferno_infra::{MatchQueueController, MockProfileSource};
//!
//! # async fn example() -> inferno_infra::ControllerResult<()> {
//! let controller =
//!     MatchQueueController::new(Arc::new(MockProfileSource::new()), &Config::default());
//! controller.start()?;
//!
//! // ... user swipes ...
//! controller.pass();
//! controller.rewind();
//!
//! controller.teardown().await?;
//! # Ok(())
//! # }
//! ```

use std::ops::ControlFlow;
use std::sync::{Arc, Weak};
use std::time::Duration;

use inferno_common::time::{Clock, ScheduledTasks, TimerHandle, TokioClock};
use inferno_core::{BoostTick, FeedService, ProfileSource, RefillOutcome, RefillTicket};
use inferno_domain::{Config, FeedSnapshot, Profile, ProfileId, SwipeDecision};
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::feed::error::{ControllerError, ControllerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Idle,
    Running,
    TornDown,
}

/// Timings the controller schedules with
#[derive(Debug, Clone, Copy)]
struct Timings {
    refill_latency: Duration,
    refill_retry: Duration,
    boost_tick: Duration,
    teardown_timeout: Duration,
}

impl Timings {
    fn from_config(config: &Config) -> Self {
        Self {
            refill_latency: config.feed.refill_latency(),
            refill_retry: config.feed.refill_retry(),
            boost_tick: config.boost.tick_interval(),
            teardown_timeout: config.feed.teardown_timeout(),
        }
    }
}

struct Inner {
    feed: Mutex<FeedService>,
    lifecycle: Mutex<Lifecycle>,
    tasks: ScheduledTasks,
    boost_timer: Mutex<Option<TimerHandle>>,
    snapshots: watch::Sender<FeedSnapshot>,
    timings: Timings,
}

/// Runtime owner of the swipe feed.
///
/// Must be used from within a tokio runtime: refills and the boost tick are
/// spawned as tasks.
pub struct MatchQueueController {
    inner: Arc<Inner>,
}

impl MatchQueueController {
    /// Create a controller reading time from the tokio clock.
    pub fn new(source: Arc<dyn ProfileSource>, config: &Config) -> Self {
        Self::with_clock(source, Arc::new(TokioClock), config)
    }

    /// Create a controller with a custom clock.
    pub fn with_clock(
        source: Arc<dyn ProfileSource>,
        clock: Arc<dyn Clock>,
        config: &Config,
    ) -> Self {
        let feed = FeedService::new(source, clock, config.feed.clone(), &config.boost);
        let (snapshots, _) = watch::channel(feed.snapshot());

        Self {
            inner: Arc::new(Inner {
                feed: Mutex::new(feed),
                lifecycle: Mutex::new(Lifecycle::Idle),
                tasks: ScheduledTasks::new(),
                boost_timer: Mutex::new(None),
                snapshots,
                timings: Timings::from_config(config),
            }),
        }
    }

    /// Begin the session by requesting the first batch.
    #[instrument(skip(self))]
    pub fn start(&self) -> ControllerResult<()> {
        {
            let mut lifecycle = self.inner.lifecycle.lock();
            match *lifecycle {
                Lifecycle::Running => return Err(ControllerError::AlreadyStarted),
                Lifecycle::TornDown => return Err(ControllerError::TornDown),
                Lifecycle::Idle => *lifecycle = Lifecycle::Running,
            }
        }

        info!("Match queue controller started");
        self.inner.request_refill();
        Ok(())
    }

    /// Whether `start` has run and `teardown` has not
    pub fn is_running(&self) -> bool {
        *self.inner.lifecycle.lock() == Lifecycle::Running
    }

    /// Request a refill. Returns `false` when one is already in flight or
    /// the controller is torn down.
    pub fn request_refill(&self) -> bool {
        self.inner.request_refill()
    }

    /// Pass on the current card; it stays available to `rewind`
    pub fn pass(&self) -> Option<Profile> {
        self.decide(SwipeDecision::Pass)
    }

    /// Like the current card
    pub fn like(&self) -> Option<Profile> {
        self.decide(SwipeDecision::Like)
    }

    /// Super-like the current card
    pub fn super_like(&self) -> Option<Profile> {
        self.decide(SwipeDecision::SuperLike)
    }

    /// Apply `decision` to the current card, then top the queue up if it
    /// ran low.
    pub fn decide(&self, decision: SwipeDecision) -> Option<Profile> {
        if self.inner.is_torn_down() {
            return None;
        }

        let consumed = self.inner.feed.lock().decide(decision);
        if consumed.is_some() {
            self.inner.publish();
            self.inner.auto_refill();
        }
        consumed
    }

    /// Undo the most recent pass
    pub fn rewind(&self) -> Option<ProfileId> {
        if self.inner.is_torn_down() {
            return None;
        }

        let restored = self.inner.feed.lock().rewind();
        if restored.is_some() {
            self.inner.publish();
            self.inner.auto_refill();
        }
        restored
    }

    /// Start a boost and the tick that counts it down. Returns `false` when
    /// a boost is already running.
    pub fn activate_boost(&self) -> bool {
        if self.inner.is_torn_down() {
            return false;
        }

        if !self.inner.feed.lock().activate_boost() {
            return false;
        }

        let weak = Arc::downgrade(&self.inner);
        let timer = self.inner.tasks.every(self.inner.timings.boost_tick, move || {
            match weak.upgrade() {
                Some(inner) => inner.tick_boost(),
                None => ControlFlow::Break(()),
            }
        });
        if let Some(previous) = self.inner.boost_timer.lock().replace(timer) {
            previous.cancel();
        }

        self.inner.publish();
        true
    }

    /// Flip the filter indicator; returns the new value. After teardown the
    /// indicator is left as it was.
    pub fn toggle_filters(&self) -> bool {
        if self.inner.is_torn_down() {
            return self.inner.feed.lock().filters_active();
        }

        let active = self.inner.feed.lock().toggle_filters();
        self.inner.publish();
        active
    }

    /// Current view of the feed
    pub fn snapshot(&self) -> FeedSnapshot {
        self.inner.feed.lock().snapshot()
    }

    /// Receive a new snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.inner.snapshots.subscribe()
    }

    /// Number of background tasks still running
    pub fn pending_tasks(&self) -> usize {
        self.inner.tasks.active_count()
    }

    /// Cancel every background task and wait for them to exit.
    ///
    /// A refill still in flight is abandoned and the queue is left as it
    /// was. Calling this twice is harmless.
    #[instrument(skip(self))]
    pub async fn teardown(&self) -> ControllerResult<()> {
        {
            let mut lifecycle = self.inner.lifecycle.lock();
            if *lifecycle == Lifecycle::TornDown {
                return Ok(());
            }
            *lifecycle = Lifecycle::TornDown;
        }

        let result = self.inner.tasks.shutdown(self.inner.timings.teardown_timeout).await;

        {
            let mut feed = self.inner.feed.lock();
            if let Some(ticket) = feed.queue().pending_refill() {
                feed.cancel_refill(ticket);
                debug!("Abandoned in-flight refill at teardown");
            }
        }
        self.inner.publish();

        result.map_err(ControllerError::from)?;
        info!("Match queue controller torn down");
        Ok(())
    }
}

impl Inner {
    fn is_torn_down(&self) -> bool {
        *self.lifecycle.lock() == Lifecycle::TornDown
    }

    fn publish(&self) {
        let snapshot = self.feed.lock().snapshot();
        self.snapshots.send_replace(snapshot);
    }

    fn request_refill(self: &Arc<Self>) -> bool {
        if self.is_torn_down() {
            return false;
        }

        let ticket = self.feed.lock().request_refill();
        match ticket {
            Some(ticket) => {
                self.schedule_completion(ticket);
                self.publish();
                true
            }
            None => false,
        }
    }

    fn auto_refill(self: &Arc<Self>) {
        if self.is_torn_down() {
            return;
        }

        let ticket = self.feed.lock().maybe_auto_refill();
        if let Some(ticket) = ticket {
            self.schedule_completion(ticket);
            self.publish();
        }
    }

    fn schedule_completion(self: &Arc<Self>, ticket: RefillTicket) {
        let weak = Arc::downgrade(self);
        self.tasks.after(self.timings.refill_latency, move || {
            if let Some(inner) = weak.upgrade() {
                inner.finish_refill(ticket);
            }
        });
    }

    fn finish_refill(self: &Arc<Self>, ticket: RefillTicket) {
        if self.is_torn_down() {
            return;
        }

        let outcome = self.feed.lock().complete_refill(ticket);
        match outcome {
            RefillOutcome::Stale => {}
            RefillOutcome::Failed(_) => {
                // No immediate auto refill: the retry timer owns the next attempt.
                let retry = self.timings.refill_retry;
                debug!(retry = ?retry, "Scheduling refill retry");
                self.schedule_retry(Arc::downgrade(self), retry);
                self.publish();
            }
            RefillOutcome::Completed { .. } | RefillOutcome::Partial { .. } => {
                self.publish();
                self.auto_refill();
            }
        }
    }

    fn schedule_retry(&self, weak: Weak<Self>, delay: Duration) {
        self.tasks.after(delay, move || {
            if let Some(inner) = weak.upgrade() {
                inner.auto_refill();
            }
        });
    }

    fn tick_boost(&self) -> ControlFlow<()> {
        if self.is_torn_down() {
            return ControlFlow::Break(());
        }

        let tick = self.feed.lock().tick_boost();
        self.publish();
        match tick {
            BoostTick::Active { .. } => ControlFlow::Continue(()),
            BoostTick::Expired | BoostTick::Inactive => {
                self.boost_timer.lock().take();
                ControlFlow::Break(())
            }
        }
    }
}

impl Drop for MatchQueueController {
    fn drop(&mut self) {
        if *self.inner.lifecycle.lock() == Lifecycle::Running {
            warn!("MatchQueueController dropped without teardown; cancelling tasks");
        }
        self.inner.tasks.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use inferno_domain::Result;

    use super::*;
    use crate::profiles::MockProfileSource;

    /// Fails the calls whose 1-based number is listed in `failing_calls`
    struct FlakySource {
        failing_calls: Vec<usize>,
        calls: Mutex<usize>,
        fallback: MockProfileSource,
    }

    impl FlakySource {
        fn new(failing_calls: Vec<usize>, seed: u64) -> Self {
            Self {
                failing_calls,
                calls: Mutex::new(0),
                fallback: MockProfileSource::with_seed(seed),
            }
        }
    }

    impl ProfileSource for FlakySource {
        fn generate(&self, count: usize) -> Result<Vec<Profile>> {
            let call = {
                let mut calls = self.calls.lock();
                *calls += 1;
                *calls
            };
            if self.failing_calls.contains(&call) {
                return Err(inferno_domain::InfernoError::ProfileSource("offline".into()));
            }
            self.fallback.generate(count)
        }
    }

    fn controller() -> MatchQueueController {
        MatchQueueController::new(Arc::new(MockProfileSource::with_seed(1)), &Config::default())
    }

    #[tokio::test(start_paused = true)]
    async fn start_twice_is_rejected() {
        let controller = controller();
        controller.start().unwrap();

        assert!(matches!(controller.start(), Err(ControllerError::AlreadyStarted)));
        controller.teardown().await.unwrap();
        assert!(matches!(controller.start(), Err(ControllerError::TornDown)));
    }

    #[tokio::test(start_paused = true)]
    async fn refill_lands_after_latency() {
        let controller = controller();
        controller.start().unwrap();
        assert!(controller.snapshot().loading);

        tokio::time::sleep(Duration::from_millis(349)).await;
        assert_eq!(controller.snapshot().queue_len, 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.queue_len, 8);
        assert!(!snapshot.loading);

        controller.teardown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn failed_refill_is_retried() {
        let source = FlakySource::new(vec![1], 2);
        let controller = MatchQueueController::new(Arc::new(source), &Config::default());
        controller.start().unwrap();

        tokio::time::sleep(Duration::from_millis(400)).await;
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.queue_len, 0);
        assert!(!snapshot.loading);

        // retry delay plus refill latency
        tokio::time::sleep(Duration::from_millis(2_000 + 400)).await;
        assert_eq!(controller.snapshot().queue_len, 8);

        controller.teardown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn second_teardown_is_ok() {
        let controller = controller();
        controller.start().unwrap();

        controller.teardown().await.unwrap();
        controller.teardown().await.unwrap();
        assert!(!controller.is_running());
        assert_eq!(controller.pass(), None);
        assert!(!controller.activate_boost());
        assert!(!controller.toggle_filters());
        assert!(!controller.toggle_filters());
        assert!(!controller.snapshot().filters_active);
    }

    #[tokio::test(start_paused = true)]
    async fn rewind_after_failed_refill_requests_again() {
        let source = FlakySource::new(vec![2], 3);
        let controller = MatchQueueController::new(Arc::new(source), &Config::default());
        controller.start().unwrap();
        tokio::time::sleep(Duration::from_millis(351)).await;
        assert_eq!(controller.snapshot().queue_len, 8);

        for _ in 0..5 {
            controller.like().unwrap();
        }
        assert!(controller.snapshot().loading);
        controller.pass().unwrap();

        // second batch fails; the retry timer is still 2 s away
        tokio::time::sleep(Duration::from_millis(351)).await;
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.queue_len, 2);
        assert!(!snapshot.loading);
        assert!(snapshot.can_rewind);

        assert!(controller.rewind().is_some());
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.queue_len, 3);
        assert!(snapshot.loading);

        tokio::time::sleep(Duration::from_millis(351)).await;
        assert_eq!(controller.snapshot().queue_len, 11);

        controller.teardown().await.unwrap();
    }
}
