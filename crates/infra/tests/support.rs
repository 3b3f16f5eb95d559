use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use inferno_core::ProfileSource;
use inferno_domain::{Config, Profile, Result};
use inferno_infra::{MatchQueueController, MockProfileSource};

/// Refill latency used by the default configuration
pub const LATENCY: Duration = Duration::from_millis(350);

/// Mock source that counts how often it was asked for profiles.
pub struct CountingSource {
    inner: MockProfileSource,
    calls: AtomicUsize,
}

impl CountingSource {
    pub fn new(seed: u64) -> Arc<Self> {
        Arc::new(Self { inner: MockProfileSource::with_seed(seed), calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProfileSource for CountingSource {
    fn generate(&self, count: usize) -> Result<Vec<Profile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.generate(count)
    }
}

/// Controller over `source` with default configuration, already started.
pub fn started(source: Arc<dyn ProfileSource>) -> MatchQueueController {
    let controller = MatchQueueController::new(source, &Config::default());
    controller.start().expect("fresh controller should start");
    controller
}

/// Advance paused time past one refill
pub async fn settle_refill() {
    tokio::time::sleep(LATENCY + Duration::from_millis(1)).await;
}
