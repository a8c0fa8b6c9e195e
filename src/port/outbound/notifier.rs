//! Notifier port for delivering change notifications.
//!
//! This module defines the trait for sending a formatted notification to a
//! chat channel, plus an in-process implementation for dry runs.

use async_trait::async_trait;

use crate::domain::Notification;
use crate::error::DeliveryError;

/// Trait for notification channels.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `send` makes a single delivery attempt; callers decide what a failure
///   means, and nothing is retried
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel name for logging.
    fn name(&self) -> &'static str;

    /// Deliver one notification.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] for network failures, non-2xx responses,
    /// or a malformed destination.
    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError>;
}

/// A logging notifier that logs notifications via tracing.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        tracing::info!(
            message = %notification.message,
            indicator = %notification.indicator,
            color = notification.indicator.color(),
            "Notification"
        );
        Ok(())
    }
}
