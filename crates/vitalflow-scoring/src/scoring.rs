use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitalflow_core::models::triage::{Probabilities, TriageLevel};

/// The vital sign a rule block looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Factor {
    Age,
    HeartRate,
    /// Systolic and diastolic together.
    BloodPressure,
    Spo2,
    RespiratoryRate,
    Temperature,
    /// Patient-reported, 1–10.
    SymptomSeverity,
}

/// Running weighted sum per triage category, before normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScores {
    pub critical: f64,
    pub moderate: f64,
    pub mild: f64,
}

impl CategoryScores {
    pub fn add(&mut self, category: TriageLevel, weight: f64) {
        match category {
            TriageLevel::Critical => self.critical += weight,
            TriageLevel::Moderate => self.moderate += weight,
            TriageLevel::Mild => self.mild += weight,
        }
    }

    pub fn total(&self) -> f64 {
        self.critical + self.moderate + self.mild
    }

    /// Divide each accumulator by the total.
    ///
    /// Every rule block adds a positive weight, so after a full evaluation the
    /// total is never zero.
    pub fn normalize(&self) -> Probabilities {
        let total = self.total();
        Probabilities {
            critical: self.critical / total,
            moderate: self.moderate / total,
            mild: self.mild / total,
        }
    }
}

/// What one rule block added to the scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contribution {
    pub factor: Factor,
    pub category: TriageLevel,
    pub weight: f64,
    pub explanation: Option<String>,
}

/// Full, untruncated result of running the rule table over one set of vitals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub scores: CategoryScores,
    /// One entry per rule block, in evaluation order.
    pub contributions: Vec<Contribution>,
}

impl Evaluation {
    /// Explanations in rule-block order.
    pub fn explanations(&self) -> impl Iterator<Item = &str> {
        self.contributions
            .iter()
            .filter_map(|c| c.explanation.as_deref())
    }
}
