//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`cycle`]: the single "run one check cycle" entry point shared by the
//!   CLI and the HTTP trigger

pub mod cycle;
