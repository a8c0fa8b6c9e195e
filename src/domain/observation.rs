//! Observations of the tracked team's status.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Comparable summary of a game's notify-relevant state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    /// Display text.
    pub text: String,
    /// Comparison key; see [`Observation::is_equivalent`].
    pub brief: String,
    /// When the observation was captured.
    pub captured_at: DateTime<Utc>,
}

impl Observation {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        brief: impl Into<String>,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            text: text.into(),
            brief: brief.into(),
            captured_at,
        }
    }

    /// Two observations are equivalent iff their brief texts are equal.
    ///
    /// Display text and capture time never participate.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.brief == other.brief
    }
}

/// Store-generated identity of one history slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ObservationKey(i64);

impl ObservationKey {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ObservationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An observation together with the slot it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredObservation {
    pub key: ObservationKey,
    #[serde(flatten)]
    pub observation: Observation,
}

/// Past observations for one scope, newest first.
pub type ObservationHistory = Vec<StoredObservation>;
