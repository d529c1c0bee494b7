/// Scalar statistics over sample sequences.
///
/// Every helper is total: degenerate input returns `0.0` instead of an error.
/// A zero result therefore does not by itself mean "no deviation"; callers
/// that need to know should check the input lengths (see
/// [`crate::analysis::DriftReport::insufficient_data`]).
pub struct StatsHelper;

impl StatsHelper {
    /// Root-mean-square error between paired sequences.
    ///
    /// Returns `0.0` when the lengths differ or either sequence is empty.
    pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
        if actual.len() != predicted.len() || actual.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = actual
            .iter()
            .zip(predicted)
            .map(|(&a, &p)| (a - p) * (a - p))
            .sum();
        (sum_sq / actual.len() as f64).sqrt()
    }

    /// Sample standard deviation with Bessel's correction (`N - 1` divisor).
    ///
    /// Returns `0.0` for fewer than two samples.
    pub fn sample_standard_deviation(data: &[f64]) -> f64 {
        if data.len() < 2 {
            return 0.0;
        }
        // A constant sequence is exactly zero even when the mean rounds.
        if data.iter().all(|&v| v == data[0]) {
            return 0.0;
        }
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let sum_sq: f64 = data.iter().map(|&v| (v - mean) * (v - mean)).sum();
        (sum_sq / (n - 1.0)).sqrt()
    }
}
