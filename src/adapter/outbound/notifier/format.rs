//! Wire formats for chat-channel notifications.

use serde::Serialize;

use crate::domain::Notification;

/// Slack incoming-webhook body.
#[derive(Debug, Serialize)]
pub struct SlackMessage<'a> {
    pub attachments: Vec<SlackAttachment<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SlackAttachment<'a> {
    /// Plain-text summary shown where attachments are not rendered.
    pub fallback: &'a str,
    pub color: &'static str,
    pub text: &'a str,
}

impl<'a> From<&'a Notification> for SlackMessage<'a> {
    fn from(notification: &'a Notification) -> Self {
        Self {
            attachments: vec![SlackAttachment {
                fallback: &notification.message,
                color: notification.indicator.color(),
                text: &notification.message,
            }],
        }
    }
}

/// HipChat room-notification body.
#[derive(Debug, Serialize)]
pub struct HipChatMessage<'a> {
    pub color: &'static str,
    pub message: &'a str,
    pub notify: bool,
    pub message_format: &'static str,
}

impl<'a> From<&'a Notification> for HipChatMessage<'a> {
    fn from(notification: &'a Notification) -> Self {
        Self {
            color: notification.indicator.color(),
            message: &notification.message,
            notify: false,
            message_format: "text",
        }
    }
}
