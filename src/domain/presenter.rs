//! Notification message and indicator derivation.

use std::fmt;

use serde::Serialize;

use super::scoreboard::{Runs, Side, TrackedGame};

/// Whether the game state is good news for the tracked team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Favorable,
    Unfavorable,
    Neutral,
}

impl Indicator {
    /// Derive the indicator from the run totals, seen from `side`.
    #[must_use]
    pub fn from_runs(runs: Runs, side: Side) -> Self {
        let (ours, theirs) = match side {
            Side::Home => (runs.home, runs.away),
            Side::Away => (runs.away, runs.home),
        };

        if ours == theirs {
            Self::Neutral
        } else if ours > theirs {
            Self::Favorable
        } else {
            Self::Unfavorable
        }
    }

    /// Hex color used by chat channels.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Favorable => "#00cc00",
            Self::Unfavorable => "#e50000",
            Self::Neutral => "#808080",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Favorable => "favorable",
            Self::Unfavorable => "unfavorable",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A formatted notification ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub indicator: Indicator,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, indicator: Indicator) -> Self {
        Self {
            message: message.into(),
            indicator,
        }
    }
}

/// Build the notification for a tracked game.
///
/// The message is the brief alert text, unchanged.
#[must_use]
pub fn present(tracked: &TrackedGame<'_>) -> Notification {
    Notification {
        message: tracked.game.alerts.brief_text.clone(),
        indicator: Indicator::from_runs(tracked.game.linescore.runs, tracked.side),
    }
}
