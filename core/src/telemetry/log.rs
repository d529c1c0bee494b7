use crate::config::env::service_name;
use log::{info, warn};

/// Writes log lines tagged with the owning service name.
#[derive(Debug, Clone)]
pub struct LogManager {
    service: String,
}

impl LogManager {
    /// Tags lines with the service name from the environment.
    pub fn new() -> Self {
        Self::with_service(service_name())
    }

    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.service, message);
    }

    pub fn warn(&self, message: &str) {
        warn!("[{}] {}", self.service, message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_manager_keeps_explicit_service_tag() {
        let logger = LogManager::with_service("SDICS_TEST");
        assert_eq!(logger.service(), "SDICS_TEST");
        logger.record("recorded without a logger installed");
    }
}
