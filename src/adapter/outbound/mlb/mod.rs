//! MLB gameday scoreboard adapter.
//!
//! Implements [`ScoreboardSource`](crate::port::ScoreboardSource) over the
//! provider's date-partitioned JSON files.

pub mod client;

pub use client::{HttpScoreboardSource, ScoreboardUrl, DEFAULT_TIMEZONE, DEFAULT_URL_TEMPLATE};
