//! Scorewatch - post a team's live game status to a chat channel when it changes.
//!
//! Each check cycle fetches today's scoreboard, finds the tracked team's
//! game, compares its brief status line with the last stored observation,
//! and when it differs persists the new observation and then sends a colored
//! notification.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Scoreboard model, observations, change detection, presentation
//! - [`port`] - Traits for the source, the store, the notifier and the cycle trigger
//! - [`application`] - The check cycle ([`application::Checker`])
//! - [`adapter`] - HTTP scoreboard client, SQLite and in-memory stores,
//!   Slack and HipChat notifiers, CLI and HTTP triggers
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use scorewatch::infrastructure::bootstrap::build_checker;
//! use scorewatch::infrastructure::config::settings::Config;
//!
//! # async fn example() -> scorewatch::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let checker = build_checker(&config, false)?;
//! let outcome = checker.check().await?;
//! println!("{}", outcome.as_str());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
