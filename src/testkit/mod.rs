//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for scoreboards and games.
//! - [`source`] - Scripted [`ScoreboardSource`](crate::port::ScoreboardSource)
//!   implementations: `FixedSource`, `SequenceSource`, `FailingSource`.

pub mod domain;
pub mod source;
