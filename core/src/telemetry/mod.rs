pub mod clock;
pub mod log;
pub mod metrics;

pub use clock::timestamp_to_iso;
pub use self::log::LogManager;
pub use metrics::{MetricsRecorder, MetricsSnapshot};
