//! Slack incoming-webhook notifier.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::format::SlackMessage;
use super::webhook::Webhook;
use crate::domain::Notification;
use crate::error::DeliveryError;
use crate::port::Notifier;

/// Configuration for the Slack notifier.
#[derive(Clone)]
pub struct SlackConfig {
    /// Full incoming-webhook URL, including its secret path.
    pub webhook_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackConfig")
            .field("webhook_url", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Posts notifications as a single colored attachment.
#[derive(Debug)]
pub struct SlackNotifier {
    webhook: Webhook,
}

impl SlackNotifier {
    /// # Errors
    ///
    /// Returns [`DeliveryError::Destination`] for a malformed webhook URL.
    pub fn new(config: &SlackConfig) -> Result<Self, DeliveryError> {
        Ok(Self {
            webhook: Webhook::new(&config.webhook_url, config.timeout)?,
        })
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    fn name(&self) -> &'static str {
        "slack"
    }

    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        debug!(host = self.webhook.host(), "Posting Slack notification");
        self.webhook.post(&SlackMessage::from(notification)).await
    }
}
