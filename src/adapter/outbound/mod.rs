//! Outbound adapters (driven side).
//!
//! - [`mlb`] - Scoreboard retrieval over HTTP
//! - [`sqlite`] - Durable observation store
//! - [`memory`] - In-process observation store
//! - [`notifier`] - Slack and HipChat delivery

pub mod memory;
pub mod mlb;
pub mod notifier;
pub mod sqlite;
