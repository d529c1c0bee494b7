//! Safety workflow summaries for ADAS/AD programs.
//!
//! [`SafetyLogic`] records the integrity level and goals of a program and
//! reports fixed lifecycle summaries. It does not evaluate or enforce
//! anything.

use crate::prelude::ScapError;
use crate::telemetry::LogManager;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const TREND_SUMMARY: &str = "The 2026 global automotive trends are expected to be dominated by the increasing adoption of autonomous vehicles, electrification, and connected car technologies.";
const DEVELOP_SUMMARY: &str =
    "Developing safety-critical systems for ADAS and AD, meeting the requirements of ISO 26262.";
const TEST_SUMMARY: &str =
    "Testing safety-critical systems for ADAS and AD, ensuring compliance with ISO 26262.";
const DEPLOY_SUMMARY: &str =
    "Deploying safety-critical systems for ADAS and AD, meeting the requirements of ISO 26262.";

/// Automotive Safety Integrity Level (ISO 26262).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsilLevel {
    #[serde(rename = "QM")]
    Qm,
    #[serde(rename = "ASIL-A")]
    A,
    #[serde(rename = "ASIL-B")]
    B,
    #[serde(rename = "ASIL-C")]
    C,
    #[serde(rename = "ASIL-D")]
    D,
}

impl fmt::Display for AsilLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qm => write!(f, "QM"),
            Self::A => write!(f, "ASIL-A"),
            Self::B => write!(f, "ASIL-B"),
            Self::C => write!(f, "ASIL-C"),
            Self::D => write!(f, "ASIL-D"),
        }
    }
}

impl FromStr for AsilLevel {
    type Err = ScapError;

    /// Accepts `QM`, `ASIL-D`, `asil-d` or a bare `D`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let level = upper.strip_prefix("ASIL-").unwrap_or(&upper);
        match level {
            "QM" => Ok(Self::Qm),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(ScapError::InvalidAsilLevel(s.to_string())),
        }
    }
}

pub struct SafetyLogic {
    asil_level: AsilLevel,
    safety_goals: Vec<String>,
    logger: LogManager,
}

impl SafetyLogic {
    pub fn new(asil_level: AsilLevel, safety_goals: Vec<String>) -> Self {
        Self {
            asil_level,
            safety_goals,
            logger: LogManager::new(),
        }
    }

    pub fn asil_level(&self) -> AsilLevel {
        self.asil_level
    }

    pub fn safety_goals(&self) -> &[String] {
        &self.safety_goals
    }

    pub fn analyze_trend(&self) -> String {
        self.report(TREND_SUMMARY)
    }

    pub fn develop_safety_critical_systems(&self) -> String {
        self.report(DEVELOP_SUMMARY)
    }

    pub fn test_safety_critical_systems(&self) -> String {
        self.report(TEST_SUMMARY)
    }

    pub fn deploy_safety_critical_systems(&self) -> String {
        self.report(DEPLOY_SUMMARY)
    }

    /// Runs trend analysis, development, testing and deployment in order.
    pub fn lifecycle(&self) -> Vec<String> {
        vec![
            self.analyze_trend(),
            self.develop_safety_critical_systems(),
            self.test_safety_critical_systems(),
            self.deploy_safety_critical_systems(),
        ]
    }

    fn report(&self, summary: &str) -> String {
        self.logger.record(&format!("{} {}", self.asil_level, summary));
        summary.to_string()
    }
}
