use crate::math::stats::StatsHelper;
use ndarray::{Array1, ArrayView2};

/// Column-wise metrics over sample matrices (rows are samples, columns axes).
pub struct AxisHelper;

impl AxisHelper {
    /// Per-axis RMSE. Mismatched shapes or an empty matrix give all zeros,
    /// one per column of `actual`.
    pub fn axis_rmse(actual: ArrayView2<f64>, predicted: ArrayView2<f64>) -> Array1<f64> {
        if actual.dim() != predicted.dim() || actual.nrows() == 0 {
            return Array1::zeros(actual.ncols());
        }
        actual
            .columns()
            .into_iter()
            .zip(predicted.columns())
            .map(|(a, p)| StatsHelper::rmse(&a.to_vec(), &p.to_vec()))
            .collect()
    }

    /// Per-axis sample standard deviation.
    pub fn axis_standard_deviation(data: ArrayView2<f64>) -> Array1<f64> {
        data.columns()
            .into_iter()
            .map(|column| StatsHelper::sample_standard_deviation(&column.to_vec()))
            .collect()
    }
}
