use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::triage::{Probabilities, TriageLevel, TriageResult};
use super::vitals::PatientVitals;

/// A triage assessment as recorded in the log store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageLog {
    pub id: Uuid,
    pub patient: PatientVitals,
    pub triage_level: TriageLevel,
    pub probabilities: Probabilities,
    pub recommended_wait: u32,
    pub recommended_action: String,
    pub explanation: Vec<String>,
    pub created_at: jiff::Timestamp,
}

/// A triage log before the store has assigned `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTriageLog {
    pub patient: PatientVitals,
    pub triage_level: TriageLevel,
    pub probabilities: Probabilities,
    pub recommended_wait: u32,
    pub recommended_action: String,
    pub explanation: Vec<String>,
}

impl NewTriageLog {
    pub fn new(patient: PatientVitals, result: &TriageResult) -> Self {
        Self {
            patient,
            triage_level: result.triage_level,
            probabilities: result.probabilities,
            recommended_wait: result.recommended_wait,
            recommended_action: result.recommended_action.clone(),
            explanation: result.explanation.clone(),
        }
    }

    pub fn into_log(self, id: Uuid, created_at: jiff::Timestamp) -> TriageLog {
        TriageLog {
            id,
            patient: self.patient,
            triage_level: self.triage_level,
            probabilities: self.probabilities,
            recommended_wait: self.recommended_wait,
            recommended_action: self.recommended_action,
            explanation: self.explanation,
            created_at,
        }
    }
}

/// Dashboard counts by triage level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageStats {
    pub total: usize,
    pub critical: usize,
    pub moderate: usize,
    pub mild: usize,
}

impl TriageStats {
    pub fn from_logs(logs: &[TriageLog]) -> Self {
        logs.iter().fold(Self::default(), |mut stats, log| {
            stats.total += 1;
            match log.triage_level {
                TriageLevel::Critical => stats.critical += 1,
                TriageLevel::Moderate => stats.moderate += 1,
                TriageLevel::Mild => stats.mild += 1,
            }
            stats
        })
    }
}
