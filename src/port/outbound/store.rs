//! Persistence port for observations.

use async_trait::async_trait;

use crate::domain::{Observation, ObservationHistory, ObservationKey, StoredObservation};
use crate::error::StoreError;

/// Durable, ordered history of observations, partitioned by scope.
///
/// The checker only reads the newest entry and overwrites it in place, but
/// implementations keep every slot they are given so the history can still
/// be inspected.
#[async_trait]
pub trait ObservationStore: Send + Sync {
    /// Most recent `limit` observations for `scope`, newest first.
    async fn history(&self, scope: &str, limit: usize) -> Result<ObservationHistory, StoreError>;

    /// The newest observation for `scope`, if any.
    async fn latest(&self, scope: &str) -> Result<Option<StoredObservation>, StoreError> {
        Ok(self.history(scope, 1).await?.into_iter().next())
    }

    /// Persist `observation`.
    ///
    /// With `slot`, the existing entry's content is replaced and its key is
    /// kept. Without, a new entry is inserted. The write is durable once
    /// this returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingSlot`] when `slot` names no entry in
    /// `scope`, and other variants for I/O failures.
    async fn record(
        &self,
        scope: &str,
        observation: &Observation,
        slot: Option<&ObservationKey>,
    ) -> Result<ObservationKey, StoreError>;
}
