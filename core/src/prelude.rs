use serde::{Deserialize, Serialize};

/// One batch of paired measurements from a single sensor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorBatch {
    pub sensor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    /// Unix time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<f64>,
    pub actual: Vec<f64>,
    pub predicted: Vec<f64>,
}

/// Common error type for the SCAP core.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScapError {
    #[error("invalid VIN: {0}")]
    InvalidVin(String),
    #[error("invalid sensor id: {0:?}")]
    InvalidSensorId(String),
    #[error("timestamp out of range: {0} ms")]
    TimestampOutOfRange(f64),
    #[error("invalid ASIL level: {0}")]
    InvalidAsilLevel(String),
}

pub type ScapResult<T> = Result<T, ScapError>;
