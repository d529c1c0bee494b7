use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Counters for analysed and rejected sensor batches.
pub struct MetricsRecorder {
    service: String,
    inner: Mutex<Metrics>,
}

#[derive(Default)]
struct Metrics {
    analyzed: usize,
    rejected: usize,
    insufficient: usize,
}

/// Point-in-time copy of the recorder, tagged with its service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub service: String,
    pub analyzed: usize,
    pub rejected: usize,
    pub insufficient: usize,
}

impl MetricsRecorder {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            inner: Mutex::new(Metrics::default()),
        }
    }

    /// Counts a completed analysis; `insufficient` marks a zero-fallback result.
    pub fn record_analyzed(&self, insufficient: bool) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.analyzed += 1;
            if insufficient {
                metrics.insufficient += 1;
            }
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let (analyzed, rejected, insufficient) = if let Ok(metrics) = self.inner.lock() {
            (metrics.analyzed, metrics.rejected, metrics.insufficient)
        } else {
            (0, 0, 0)
        };
        MetricsSnapshot {
            service: self.service.clone(),
            analyzed,
            rejected,
            insufficient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn recorder_counts_across_threads() {
        let recorder = Arc::new(MetricsRecorder::new("SDICS_TEST"));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let recorder = recorder.clone();
                thread::spawn(move || {
                    recorder.record_analyzed(i % 2 == 0);
                    recorder.record_rejected();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.service, "SDICS_TEST");
        assert_eq!(snapshot.analyzed, 4);
        assert_eq!(snapshot.rejected, 4);
        assert_eq!(snapshot.insufficient, 2);
    }
}
