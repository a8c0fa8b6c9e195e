//! In-memory observation store for testing and dry runs.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Observation, ObservationHistory, ObservationKey, StoredObservation};
use crate::error::StoreError;
use crate::port::ObservationStore;

#[derive(Debug, Default)]
struct Inner {
    next_key: i64,
    scopes: HashMap<String, Vec<StoredObservation>>,
}

/// In-memory store; contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryObservationStore {
    inner: RwLock<Inner>,
}

impl MemoryObservationStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries held for `scope`.
    #[must_use]
    pub fn len(&self, scope: &str) -> usize {
        self.inner.read().scopes.get(scope).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self, scope: &str) -> bool {
        self.len(scope) == 0
    }
}

#[async_trait]
impl ObservationStore for MemoryObservationStore {
    async fn history(&self, scope: &str, limit: usize) -> Result<ObservationHistory, StoreError> {
        let inner = self.inner.read();
        let mut entries = inner.scopes.get(scope).cloned().unwrap_or_default();
        entries.sort_by(|a, b| {
            b.observation
                .captured_at
                .cmp(&a.observation.captured_at)
                .then_with(|| b.key.cmp(&a.key))
        });
        entries.truncate(limit);
        Ok(entries)
    }

    async fn record(
        &self,
        scope: &str,
        observation: &Observation,
        slot: Option<&ObservationKey>,
    ) -> Result<ObservationKey, StoreError> {
        let mut inner = self.inner.write();

        if let Some(key) = slot {
            let entry = inner
                .scopes
                .get_mut(scope)
                .and_then(|entries| entries.iter_mut().find(|e| e.key == *key))
                .ok_or(StoreError::MissingSlot(key.get()))?;
            entry.observation = observation.clone();
            return Ok(*key);
        }

        inner.next_key += 1;
        let key = ObservationKey::new(inner.next_key);
        inner
            .scopes
            .entry(scope.to_string())
            .or_default()
            .push(StoredObservation {
                key,
                observation: observation.clone(),
            });
        Ok(key)
    }
}
