//! The check cycle.
//!
//! One cycle walks `Fetching → Extracting → Detecting → (Persisting →
//! Notifying)` and stops at the first failure. The observation is always
//! persisted before the notification is attempted: a failed delivery leaves
//! the change recorded as seen, so it is never sent twice.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::domain::{present, should_notify, Decision};
use crate::error::Result;
use crate::port::{CycleOutcome, CycleRunner, Notifier, ObservationStore, ScoreboardSource};

/// Phase of a running cycle, attached to log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Fetching,
    Extracting,
    Detecting,
    Persisting,
    Notifying,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fetching => "fetching",
            Self::Extracting => "extracting",
            Self::Detecting => "detecting",
            Self::Persisting => "persisting",
            Self::Notifying => "notifying",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the checker tracks.
#[derive(Debug, Clone)]
pub struct Tracking {
    /// City the team plays under on the scoreboard, e.g. "Toronto".
    pub team: String,
    /// Store category observations are kept under.
    pub scope: String,
}

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Runs check cycles against one source, store and notifier.
pub struct Checker {
    tracking: Tracking,
    source: Arc<dyn ScoreboardSource>,
    store: Arc<dyn ObservationStore>,
    notifier: Arc<dyn Notifier>,
    clock: Clock,
}

impl Checker {
    #[must_use]
    pub fn new(
        tracking: Tracking,
        source: Arc<dyn ScoreboardSource>,
        store: Arc<dyn ObservationStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            tracking,
            source,
            store,
            notifier,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the clock used to stamp observations.
    #[must_use]
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    #[must_use]
    pub fn tracking(&self) -> &Tracking {
        &self.tracking
    }

    /// Run one cycle, logging any failure with the phase it occurred in.
    ///
    /// # Errors
    ///
    /// Returns the fetch, store or delivery error that ended the cycle.
    pub async fn check(&self) -> Result<CycleOutcome> {
        let mut phase = Phase::Fetching;
        match self.run(&mut phase).await {
            Ok(outcome) => {
                info!(
                    team = %self.tracking.team,
                    outcome = outcome.as_str(),
                    "Cycle complete"
                );
                Ok(outcome)
            }
            Err(e) => {
                error!(
                    team = %self.tracking.team,
                    scope = %self.tracking.scope,
                    phase = %phase,
                    error = %e,
                    "Cycle failed"
                );
                Err(e)
            }
        }
    }

    async fn run(&self, phase: &mut Phase) -> Result<CycleOutcome> {
        let Tracking { team, scope } = &self.tracking;

        *phase = Phase::Fetching;
        let scoreboard = self.source.fetch().await?;

        *phase = Phase::Extracting;
        let Some(tracked) = scoreboard.find(team) else {
            debug!(team = %team, games = scoreboard.games().len(), "No game today");
            return Ok(CycleOutcome::NoGame);
        };

        *phase = Phase::Detecting;
        let current = tracked.observe((self.clock)());
        let history = self.store.history(scope, 1).await?;
        let decision = should_notify(&current, &history);
        if decision == Decision::Skip {
            debug!(team = %team, brief = %current.brief, "Status unchanged");
            return Ok(CycleOutcome::Unchanged);
        }

        *phase = Phase::Persisting;
        let key = self.store.record(scope, &current, decision.slot()).await?;
        info!(
            scope = %scope,
            key = %key,
            brief = %current.brief,
            overwrite = decision.slot().is_some(),
            "Observation stored"
        );

        *phase = Phase::Notifying;
        let notification = present(&tracked);
        self.notifier.send(&notification).await?;
        info!(
            channel = self.notifier.name(),
            side = tracked.side.as_str(),
            indicator = %notification.indicator,
            "Notification sent"
        );

        Ok(CycleOutcome::Notified {
            message: notification.message,
            indicator: notification.indicator,
            key,
        })
    }
}

#[async_trait]
impl CycleRunner for Checker {
    async fn run_cycle(&self) -> Result<CycleOutcome> {
        self.check().await
    }
}
