//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the infrastructure the checker depends on: the
//! scoreboard provider, observation storage, and the notification channel.

pub mod notifier;
pub mod source;
pub mod store;
