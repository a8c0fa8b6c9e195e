use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use scorewatch::domain::Notification;
use scorewatch::error::DeliveryError;
use scorewatch::port::Notifier;

/// Thread-safe notification collector for delivery assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that records each attempt and then fails it.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, notification: &Notification) -> Result<(), DeliveryError> {
        self.sent.lock().push(notification.clone());
        if self.fail {
            return Err(DeliveryError::Status {
                status: 500,
                body: "recording notifier set to fail".into(),
            });
        }
        Ok(())
    }
}
