//! Check-cycle port for trigger adapters.
//!
//! Triggers (the CLI, the HTTP endpoint) depend on [`CycleRunner`] rather
//! than on the concrete checker so they stay decoupled from how a cycle is
//! wired.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Indicator, ObservationKey};
use crate::error::Result;

/// How a successful cycle ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CycleOutcome {
    /// The tracked team has no game on today's scoreboard.
    NoGame,
    /// The game's brief text matches the stored observation.
    Unchanged,
    /// A new observation was stored and a notification delivered.
    Notified {
        message: String,
        indicator: Indicator,
        key: ObservationKey,
    },
}

impl CycleOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoGame => "no_game",
            Self::Unchanged => "unchanged",
            Self::Notified { .. } => "notified",
        }
    }
}

/// Runs exactly one fetch-extract-detect-(persist-notify) cycle.
#[async_trait]
pub trait CycleRunner: Send + Sync {
    /// Run one cycle to completion.
    ///
    /// # Errors
    ///
    /// Any fetch, store or delivery failure ends the cycle and is returned.
    async fn run_cycle(&self) -> Result<CycleOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_with_tag() {
        let outcome = CycleOutcome::Notified {
            message: "Jays win".into(),
            indicator: Indicator::Favorable,
            key: ObservationKey::new(1),
        };

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["outcome"], "notified");
        assert_eq!(value["message"], "Jays win");
        assert_eq!(value["indicator"], "favorable");
        assert_eq!(value["key"], 1);

        let value = serde_json::to_value(CycleOutcome::NoGame).unwrap();
        assert_eq!(value["outcome"], "no_game");
    }
}
