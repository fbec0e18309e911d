//! Spontaneous conception prognosis engine.
//!
//! The [`prognosis`] module holds the pure calculation pipeline (factor evaluators, multiplicative
//! composer, report generator and simulator). The remaining modules carry the configuration,
//! error and telemetry plumbing shared with the HTTP host.

pub mod config;
pub mod error;
pub mod prognosis;
pub mod telemetry;
