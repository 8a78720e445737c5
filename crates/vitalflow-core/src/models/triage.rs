use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Priority category assigned to a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TriageLevel {
    Critical,
    Moderate,
    Mild,
}

impl TriageLevel {
    /// Minutes the patient may wait before assessment.
    pub fn recommended_wait(self) -> u32 {
        match self {
            TriageLevel::Critical => 0,
            TriageLevel::Moderate => 30,
            TriageLevel::Mild => 120,
        }
    }

    pub fn recommended_action(self) -> &'static str {
        match self {
            TriageLevel::Critical => "Immediate assessment and intervention required",
            TriageLevel::Moderate => "Assess within 30 minutes, monitor closely",
            TriageLevel::Mild => "Standard assessment, can wait for available resources",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TriageLevel::Critical => "Critical",
            TriageLevel::Moderate => "Moderate",
            TriageLevel::Mild => "Mild",
        }
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized confidence per triage level. The three values sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Probabilities {
    pub critical: f64,
    pub moderate: f64,
    pub mild: f64,
}

/// The outcome of scoring one set of vitals.
///
/// Field order is part of the wire contract with the web form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageResult {
    pub triage_level: TriageLevel,
    pub probabilities: Probabilities,
    pub recommended_wait: u32,
    pub recommended_action: String,
    pub explanation: Vec<String>,
}
