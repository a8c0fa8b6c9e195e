//! Application services built on the domain and ports.
//!
//! - [`cycle`]: the [`Checker`](cycle::Checker), which runs one check cycle
//!   per trigger

pub mod cycle;

pub use cycle::{Checker, Phase, Tracking};
