//! Change detection between a fresh observation and stored history.
//!
//! This is the only gate against repeat notifications: a cycle that sees the
//! same brief text as the newest stored entry does nothing.

use super::observation::{Observation, ObservationKey, StoredObservation};

/// What the checker should do with a fresh observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Nothing changed since the last stored observation.
    Skip,
    /// No history yet; store as a new entry and notify.
    Insert,
    /// The newest entry differs; overwrite that slot in place and notify.
    Overwrite(ObservationKey),
}

impl Decision {
    #[must_use]
    pub const fn notify(&self) -> bool {
        !matches!(self, Self::Skip)
    }

    /// Slot to overwrite, if the write should replace an existing entry.
    #[must_use]
    pub const fn slot(&self) -> Option<&ObservationKey> {
        match self {
            Self::Overwrite(key) => Some(key),
            _ => None,
        }
    }
}

/// Decide whether `current` warrants a notification.
///
/// `history` must be ordered newest first; only its head is consulted. A
/// changed observation collapses onto the head slot instead of appending.
#[must_use]
pub fn should_notify(current: &Observation, history: &[StoredObservation]) -> Decision {
    match history.first() {
        None => Decision::Insert,
        Some(latest) if latest.observation.is_equivalent(current) => Decision::Skip,
        Some(latest) => Decision::Overwrite(latest.key),
    }
}
