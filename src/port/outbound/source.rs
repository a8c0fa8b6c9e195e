//! Scoreboard source port.

use async_trait::async_trait;

use crate::domain::Scoreboard;
use crate::error::FetchError;

/// Provider of today's scoreboard.
///
/// Implementations decide what "today" means (the provider's calendar day)
/// and how the document is retrieved.
#[async_trait]
pub trait ScoreboardSource: Send + Sync {
    /// Fetch and decode the scoreboard for the current day.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] for network, status, timezone or decoding
    /// failures. No retry is attempted.
    async fn fetch(&self) -> Result<Scoreboard, FetchError>;
}
