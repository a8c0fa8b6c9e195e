//! Transport-agnostic types and decision logic.
//!
//! - [`scoreboard`] - Provider payload and tracked-game extraction
//! - [`observation`] - Stored, comparable snapshots of a game's status
//! - [`detector`] - The notify/skip decision
//! - [`presenter`] - Message and indicator derivation

pub mod detector;
pub mod observation;
pub mod presenter;
pub mod scoreboard;

pub use detector::{should_notify, Decision};
pub use observation::{Observation, ObservationHistory, ObservationKey, StoredObservation};
pub use presenter::{present, Indicator, Notification};
pub use scoreboard::{Scoreboard, Side, TrackedGame};
