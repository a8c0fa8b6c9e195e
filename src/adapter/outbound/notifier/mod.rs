//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the supported chat channels.

pub mod format;
pub mod hipchat;
pub mod slack;
mod webhook;

pub use hipchat::{HipChatConfig, HipChatNotifier};
pub use slack::{SlackConfig, SlackNotifier};
