//! Inbound adapters (driving side).
//!
//! - [`cli`] - Command-line entry points
//! - [`http`] - HTTP poll trigger

pub mod cli;
pub mod http;
