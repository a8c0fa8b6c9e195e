//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (the scoreboard provider, the database, the chat channel).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!   CLI / HTTP ─────▶│   CycleRunner (Checker) │
//!                    └─────────────────────────┘
//!                                │
//!     ┌──────────────────────────┼─────────────────────────┐
//!     ▼                          ▼                         ▼
//! ┌──────────────┐      ┌──────────────────┐        ┌───────────┐
//! │ Scoreboard   │      │ ObservationStore │        │ Notifier  │
//! │ Source       │      │ Adapter          │        │ Adapter   │
//! └──────────────┘      └──────────────────┘        └───────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::cycle::{CycleOutcome, CycleRunner};
pub use outbound::notifier::{LogNotifier, Notifier};
pub use outbound::source::ScoreboardSource;
pub use outbound::store::ObservationStore;
