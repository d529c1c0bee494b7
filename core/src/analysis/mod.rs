pub mod drift;

pub use drift::{DriftAnalyzer, DriftReport};
