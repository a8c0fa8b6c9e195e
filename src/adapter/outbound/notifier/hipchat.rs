//! HipChat room notifier.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::format::HipChatMessage;
use super::webhook::Webhook;
use crate::domain::Notification;
use crate::error::DeliveryError;
use crate::port::Notifier;

/// Default HipChat API base.
pub const DEFAULT_API_BASE: &str = "https://api.hipchat.com";

/// Configuration for the HipChat notifier.
#[derive(Clone)]
pub struct HipChatConfig {
    /// API base URL, without a trailing slash.
    pub api_base: String,
    /// Numeric room ID.
    pub room_id: u64,
    /// Room notification token.
    pub auth_token: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HipChatConfig {
    /// Room notification endpoint, token included.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v2/room/{}/notification?auth_token={}",
            self.api_base.trim_end_matches('/'),
            self.room_id,
            self.auth_token
        )
    }
}

impl fmt::Debug for HipChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HipChatConfig")
            .field("api_base", &self.api_base)
            .field("room_id", &self.room_id)
            .field("auth_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Posts notifications to a HipChat room.
pub struct HipChatNotifier {
    webhook: Webhook,
    room_id: u64,
}

impl fmt::Debug for HipChatNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HipChatNotifier")
            .field("room_id", &self.room_id)
            .field("webhook", &self.webhook)
            .finish()
    }
}

impl HipChatNotifier {
    /// # Errors
    ///
    /// Returns [`DeliveryError::Destination`] for a malformed API base.
    pub fn new(config: &HipChatConfig) -> Result<Self, DeliveryError> {
        Ok(Self {
            webhook: Webhook::new(&config.endpoint(), config.timeout)?,
            room_id: config.room_id,
        })
    }
}

#[async_trait]
impl Notifier for HipChatNotifier {
    fn name(&self) -> &'static str {
        "hipchat"
    }

    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        debug!(room_id = self.room_id, "Posting HipChat notification");
        self.webhook.post(&HipChatMessage::from(notification)).await
    }
}
