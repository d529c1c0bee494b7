use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use scapcore::safety::AsilLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub sensor_id: String,
    pub vin: Option<String>,
    pub samples: usize,
    pub noise: f64,
    pub bias: f64,
    pub seed: u64,
    pub asil_level: AsilLevel,
    pub safety_goals: Vec<String>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        let generator = GeneratorConfig::default();
        Self {
            sensor_id: generator.sensor_id,
            vin: None,
            samples: generator.samples,
            noise: generator.noise,
            bias: generator.bias,
            seed: generator.seed,
            asil_level: AsilLevel::D,
            safety_goals: Vec::new(),
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(sensor_id: String, samples: usize, noise: f64, bias: f64, seed: u64) -> Self {
        Self {
            sensor_id,
            samples,
            noise,
            bias,
            seed,
            ..Default::default()
        }
    }

    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            sensor_id: self.sensor_id.clone(),
            vin: self.vin.clone(),
            samples: self.samples,
            noise: self.noise,
            bias: self.bias,
            seed: self.seed,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_generator_config() {
        let cfg = WorkflowConfig::from_args("RADAR_REAR_2".into(), 512, 0.1, 0.3, 7);
        let generator = cfg.to_generator_config();
        assert_eq!(generator.sensor_id, "RADAR_REAR_2");
        assert_eq!(generator.samples, 512);
        assert_eq!(generator.seed, 7);
        assert_eq!(cfg.asil_level, AsilLevel::D);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"sensor_id: CAM_LEFT_01\nvin: 1HGCM82633A004352\nsamples: 64\nasil_level: ASIL-B\nsafety_goals:\n  - Goal 1\n  - Goal 2\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.sensor_id, "CAM_LEFT_01");
        assert_eq!(cfg.vin.as_deref(), Some("1HGCM82633A004352"));
        assert_eq!(cfg.samples, 64);
        assert_eq!(cfg.asil_level, AsilLevel::B);
        assert_eq!(cfg.safety_goals.len(), 2);
        assert_eq!(cfg.noise, GeneratorConfig::default().noise);
    }

    #[test]
    fn config_load_reports_missing_file() {
        let err = WorkflowConfig::load("/nonexistent/workflow.yaml").unwrap_err();
        assert!(format!("{:#}", err).contains("reading workflow config"));
    }
}
