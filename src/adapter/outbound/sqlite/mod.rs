//! SQLite persistence adapter.
//!
//! Provides the SQLite-backed observation store using Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteObservationStore;
