use scapcore::analysis::DriftReport;
use serde::{Deserialize, Serialize};

/// State served to report consumers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportModel {
    pub latest: Option<DriftReport>,
    pub reports_received: usize,
    pub scenario: Option<String>,
}

impl ReportModel {
    pub fn record(&mut self, report: DriftReport, scenario: Option<String>) {
        self.latest = Some(report);
        self.reports_received += 1;
        self.scenario = scenario;
    }
}
