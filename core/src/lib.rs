//! Core statistics, validation and reporting helpers for the SCAP platform.
//!
//! The statistics helpers are pure and total: degenerate input yields a
//! defined `0.0` rather than an error. Report-level code records when that
//! fallback was taken so callers can tell it apart from a real zero.

pub mod analysis;
pub mod config;
pub mod math;
pub mod prelude;
pub mod safety;
pub mod telemetry;
pub mod validation;

pub use prelude::{ScapError, ScapResult, SensorBatch};
