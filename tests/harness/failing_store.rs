use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use scorewatch::adapter::outbound::memory::MemoryObservationStore;
use scorewatch::domain::{Observation, ObservationHistory, ObservationKey};
use scorewatch::error::StoreError;
use scorewatch::port::ObservationStore;

/// Memory store whose reads or writes can be made to fail.
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryObservationStore,
    fail_reads: bool,
    fail_writes: bool,
    writes: AtomicUsize,
}

impl FailingStore {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Number of `record` calls that reached the store, failed or not.
    pub fn write_attempts(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObservationStore for FailingStore {
    async fn history(&self, scope: &str, limit: usize) -> Result<ObservationHistory, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("reads disabled".into()));
        }
        self.inner.history(scope, limit).await
    }

    async fn record(
        &self,
        scope: &str,
        observation: &Observation,
        slot: Option<&ObservationKey>,
    ) -> Result<ObservationKey, StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StoreError::Unavailable("writes disabled".into()));
        }
        self.inner.record(scope, observation, slot).await
    }
}
