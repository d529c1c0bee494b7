use std::f64::consts::PI;

/// Sine reference trace with `frequency` cycles over `length` samples.
pub fn sine_wave(length: usize, frequency: f64, amplitude: f64) -> Vec<f64> {
    (0..length)
        .map(|i| amplitude * ((i as f64 * frequency) / length as f64 * 2.0 * PI).sin())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_wave_starts_at_zero_and_is_bounded() {
        let wave = sine_wave(64, 4.0, 2.5);
        assert_eq!(wave.len(), 64);
        assert_eq!(wave[0], 0.0);
        assert!(wave.iter().all(|v| v.abs() <= 2.5));
    }
}
