pub mod axis;
pub mod stats;

pub use axis::AxisHelper;
pub use stats::StatsHelper;
