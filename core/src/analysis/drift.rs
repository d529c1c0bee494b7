use crate::math::stats::StatsHelper;
use crate::prelude::{ScapError, ScapResult, SensorBatch};
use crate::telemetry::{timestamp_to_iso, LogManager};
use crate::validation::{is_valid_sensor_id, validate_vin};
use serde::{Deserialize, Serialize};

/// Drift summary for one sensor batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriftReport {
    pub service: String,
    pub sensor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    /// ISO-8601 UTC time of the batch, or of the analysis when absent.
    pub timestamp: String,
    pub sample_count: usize,
    pub rmse: f64,
    pub noise_std_dev: f64,
    pub residual_std_dev: f64,
    /// Set when the metrics above are zero fallbacks rather than measurements:
    /// the sequences differ in length or hold fewer than two pairs.
    pub insufficient_data: bool,
}

impl DriftReport {
    pub fn summary_line(&self) -> String {
        format!(
            "sensor={} samples={} rmse={:.6} noise_std={:.6} residual_std={:.6} insufficient={}",
            self.sensor_id,
            self.sample_count,
            self.rmse,
            self.noise_std_dev,
            self.residual_std_dev,
            self.insufficient_data
        )
    }
}

/// Validates a batch's identifiers and computes its drift metrics.
#[derive(Debug, Clone, Default)]
pub struct DriftAnalyzer {
    logger: LogManager,
}

impl DriftAnalyzer {
    pub fn new(logger: LogManager) -> Self {
        Self { logger }
    }

    pub fn analyze(&self, batch: &SensorBatch) -> ScapResult<DriftReport> {
        if !is_valid_sensor_id(&batch.sensor_id) {
            self.logger
                .warn(&format!("rejected sensor id {:?}", batch.sensor_id));
            return Err(ScapError::InvalidSensorId(batch.sensor_id.clone()));
        }
        if let Some(vin) = batch.vin.as_deref() {
            if !validate_vin(vin) {
                self.logger.warn(&format!("rejected VIN {:?}", vin));
                return Err(ScapError::InvalidVin(vin.to_string()));
            }
        }

        let timestamp = timestamp_to_iso(batch.timestamp_ms)?;
        let paired = batch.actual.len() == batch.predicted.len();
        let residuals: Vec<f64> = if paired {
            batch
                .actual
                .iter()
                .zip(&batch.predicted)
                .map(|(a, p)| a - p)
                .collect()
        } else {
            Vec::new()
        };

        let report = DriftReport {
            service: self.logger.service().to_string(),
            sensor_id: batch.sensor_id.clone(),
            vin: batch.vin.clone(),
            timestamp,
            sample_count: batch.actual.len(),
            rmse: StatsHelper::rmse(&batch.actual, &batch.predicted),
            noise_std_dev: StatsHelper::sample_standard_deviation(&batch.actual),
            residual_std_dev: StatsHelper::sample_standard_deviation(&residuals),
            insufficient_data: !paired || batch.actual.len() < 2,
        };

        self.logger.record(&report.summary_line());
        Ok(report)
    }
}
