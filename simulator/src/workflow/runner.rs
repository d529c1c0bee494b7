use crate::generator::profile::build_sensor_batch_from_config;
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use scapcore::analysis::{DriftAnalyzer, DriftReport};
use scapcore::config::service_name;
use scapcore::safety::SafetyLogic;
use scapcore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use scapcore::SensorBatch;
use std::sync::Arc;

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    analyzer: DriftAnalyzer,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        let service = service_name();
        Self {
            config,
            analyzer: DriftAnalyzer::new(LogManager::with_service(service.clone())),
            metrics: Arc::new(MetricsRecorder::new(service)),
        }
    }

    pub fn execute(&self, batch: &SensorBatch) -> anyhow::Result<DriftReport> {
        match self.analyzer.analyze(batch) {
            Ok(report) => {
                self.metrics.record_analyzed(report.insufficient_data);
                Ok(report)
            }
            Err(err) => {
                self.metrics.record_rejected();
                Err(err).with_context(|| format!("analyzing batch from {:?}", batch.sensor_id))
            }
        }
    }

    /// Generates a batch from the workflow config and analyses it.
    pub fn run_offline(&self) -> anyhow::Result<DriftReport> {
        let batch = build_sensor_batch_from_config(&self.config.to_generator_config())
            .context("generating offline sensor batch")?;
        self.execute(&batch)
    }

    pub fn safety_logic(&self) -> SafetyLogic {
        SafetyLogic::new(self.config.asil_level, self.config.safety_goals.clone())
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn runner_executes_offline_workflow() {
        let cfg = WorkflowConfig::from_args("LIDAR_FRONT_001".into(), 32, 0.0, 0.5, 1);
        let runner = Runner::new(cfg.clone());
        let report = runner.run_offline().unwrap();
        assert_eq!(report.sample_count, cfg.samples);
        assert_abs_diff_eq!(report.rmse, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(report.residual_std_dev, 0.0, epsilon = 1e-9);
        assert!(!report.insufficient_data);
        assert_eq!(runner.metrics().analyzed, 1);
    }

    #[test]
    fn runner_counts_rejected_batches() {
        let runner = Runner::new(WorkflowConfig::default());
        let batch = SensorBatch {
            sensor_id: String::new(),
            vin: None,
            timestamp_ms: None,
            actual: vec![1.0, 2.0],
            predicted: vec![1.0, 2.0],
        };
        let err = runner.execute(&batch).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid sensor id"));

        let metrics = runner.metrics();
        assert_eq!(metrics.analyzed, 0);
        assert_eq!(metrics.rejected, 1);
    }

    #[test]
    fn runner_exposes_safety_logic_from_config() {
        let mut cfg = WorkflowConfig::default();
        cfg.safety_goals = vec!["Goal 1".into()];
        let logic = Runner::new(cfg).safety_logic();
        assert_eq!(logic.safety_goals(), ["Goal 1".to_string()]);
        assert_eq!(logic.lifecycle().len(), 4);
    }
}
