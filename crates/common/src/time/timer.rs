//! One-shot and recurring timers
//!
//! Timers are spawned onto the tokio runtime and registered with a
//! [`ScheduledTasks`] group. Cancelling the group cancels every timer it
//! owns; [`ScheduledTasks::shutdown`] additionally waits for the spawned
//! tasks to exit, so no callback runs once it returns.

use std::ops::ControlFlow;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// A timer handle that can be used to cancel a single timer
#[derive(Debug, Clone)]
pub struct TimerHandle {
    token: CancellationToken,
}

impl TimerHandle {
    /// Cancel the timer
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check if the timer has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Errors reported while shutting a task group down
#[derive(Debug, Error)]
pub enum ShutdownError {
    /// Tasks were still running when the deadline passed
    #[error("{pending} scheduled task(s) still running after {timeout:?}")]
    Timeout { pending: usize, timeout: Duration },

    /// A task panicked
    #[error("scheduled task failed: {0}")]
    TaskJoinFailed(String),
}

/// A group of timers with shared cancellation.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Default)]
pub struct ScheduledTasks {
    cancellation: CancellationToken,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl ScheduledTasks {
    /// Create an empty task group
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` once after `delay` unless cancelled first.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::time::Duration;
    ///
    /// use inferno_common::time::ScheduledTasks;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let tasks = ScheduledTasks::new();
    ///     tasks.after(Duration::from_millis(350), || println!("refill landed"));
    ///     tasks.shutdown(Duration::from_secs(1)).await.ok();
    /// }
    /// ```
    pub fn after<F>(&self, delay: Duration, callback: F) -> TimerHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let token = self.cancellation.child_token();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                () = task_token.cancelled() => {
                    debug!("one-shot timer cancelled before firing");
                }
                () = sleep(delay) => callback(),
            }
        });

        self.track(handle);
        TimerHandle { token }
    }

    /// Run `callback` every `period` until it returns
    /// [`ControlFlow::Break`] or the timer is cancelled.
    ///
    /// The first invocation happens one full period after scheduling.
    pub fn every<F>(&self, period: Duration, mut callback: F) -> TimerHandle
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let token = self.cancellation.child_token();
        let task_token = token.clone();
        let period = period.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    () = task_token.cancelled() => {
                        debug!("recurring timer cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        if callback().is_break() {
                            break;
                        }
                    }
                }
            }
        });

        self.track(handle);
        TimerHandle { token }
    }

    /// Cancel every timer in the group without waiting.
    pub fn cancel_all(&self) {
        self.cancellation.cancel();
    }

    /// Whether the group has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Number of spawned tasks that have not finished yet
    pub fn active_count(&self) -> usize {
        self.handles.lock().iter().filter(|handle| !handle.is_finished()).count()
    }

    /// Cancel every timer and wait up to `limit` for the tasks to exit.
    pub async fn shutdown(&self, limit: Duration) -> Result<(), ShutdownError> {
        self.cancel_all();

        let handles: Vec<JoinHandle<()>> = std::mem::take(&mut *self.handles.lock());
        let deadline = Instant::now() + limit;
        let total = handles.len();

        for (index, handle) in handles.into_iter().enumerate() {
            match timeout(deadline.saturating_duration_since(Instant::now()), handle).await {
                Ok(Ok(())) => {}
                Ok(Err(join_err)) if join_err.is_cancelled() => {}
                Ok(Err(join_err)) => {
                    return Err(ShutdownError::TaskJoinFailed(join_err.to_string()));
                }
                Err(_) => {
                    let pending = total - index;
                    warn!(pending, "scheduled tasks did not exit before shutdown deadline");
                    return Err(ShutdownError::Timeout { pending, timeout: limit });
                }
            }
        }

        Ok(())
    }

    fn track(&self, handle: JoinHandle<()>) {
        let mut handles = self.handles.lock();
        handles.retain(|existing| !existing.is_finished());
        handles.push(handle);
    }
}

impl Drop for ScheduledTasks {
    fn drop(&mut self) {
        self.cancellation.cancel();
    }
}
