use crate::generator::template::sine_wave;
use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};
use scapcore::SensorBatch;
use serde::{Deserialize, Serialize};

/// Upper bound on generated samples per batch (8 MiB per sequence).
pub const MAX_SAMPLES: usize = 1 << 20;

/// Configuration for generating a synthetic sensor batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub sensor_id: String,
    pub vin: Option<String>,
    pub samples: usize,
    pub frequency: f64,
    pub amplitude: f64,
    /// Half-width of the uniform jitter added to each reading.
    pub noise: f64,
    /// Constant offset between readings and reference (sensor drift).
    pub bias: f64,
    pub seed: u64,
    pub timestamp_ms: Option<f64>,
    pub description: Option<String>,
    pub scenario: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sensor_id: "LIDAR_FRONT_001".into(),
            vin: None,
            samples: 256,
            frequency: 4.0,
            amplitude: 1.0,
            noise: 0.05,
            bias: 0.0,
            seed: 0,
            timestamp_ms: None,
            description: None,
            scenario: None,
        }
    }
}

pub fn build_sensor_batch_from_config(config: &GeneratorConfig) -> anyhow::Result<SensorBatch> {
    ensure!(
        config.noise.is_finite() && config.noise >= 0.0,
        "generator noise must be a finite non-negative value, got {}",
        config.noise
    );
    ensure!(
        (2.0 * config.noise).is_finite(),
        "generator noise {} is too large to sample",
        config.noise
    );
    ensure!(config.bias.is_finite(), "generator bias must be finite");
    ensure!(
        config.samples <= MAX_SAMPLES,
        "generator samples {} exceeds the maximum of {}",
        config.samples,
        MAX_SAMPLES
    );

    let predicted = sine_wave(config.samples, config.frequency, config.amplitude);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let actual = predicted
        .iter()
        .map(|&reference| {
            let jitter = if config.noise > 0.0 {
                rng.gen_range(-config.noise..config.noise)
            } else {
                0.0
            };
            reference + config.bias + jitter
        })
        .collect();

    Ok(SensorBatch {
        sensor_id: config.sensor_id.clone(),
        vin: config.vin.clone(),
        timestamp_ms: config.timestamp_ms,
        actual,
        predicted,
    })
}
