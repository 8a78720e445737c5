use std::sync::LazyLock;

use vitalflow_core::models::triage::TriageLevel;
use vitalflow_core::models::vitals::PatientVitals;

use crate::format::js_number;
use crate::scoring::{Contribution, Factor};

/// What a matching tier adds: a weight to one category, and optionally a line
/// of explanation.
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub category: TriageLevel,
    pub weight: f64,
    pub explain: Option<fn(&PatientVitals) -> String>,
}

/// A guarded outcome. Tiers of a block are tried in order.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub applies: fn(&PatientVitals) -> bool,
    pub outcome: Outcome,
}

/// All tiers for one vital sign. `otherwise` applies when no tier matches.
#[derive(Debug, Clone)]
pub struct RuleBlock {
    pub factor: Factor,
    pub tiers: Vec<Tier>,
    pub otherwise: Outcome,
}

impl RuleBlock {
    pub fn evaluate(&self, vitals: &PatientVitals) -> Contribution {
        let outcome = self
            .tiers
            .iter()
            .find(|tier| (tier.applies)(vitals))
            .map_or(&self.otherwise, |tier| &tier.outcome);

        Contribution {
            factor: self.factor,
            category: outcome.category,
            weight: outcome.weight,
            explanation: outcome.explain.map(|explain| explain(vitals)),
        }
    }
}

fn tier(applies: fn(&PatientVitals) -> bool, outcome: Outcome) -> Tier {
    Tier { applies, outcome }
}

fn explained(category: TriageLevel, weight: f64, explain: fn(&PatientVitals) -> String) -> Outcome {
    Outcome {
        category,
        weight,
        explain: Some(explain),
    }
}

fn silent(category: TriageLevel, weight: f64) -> Outcome {
    Outcome {
        category,
        weight,
        explain: None,
    }
}

/// The rule table, in evaluation order.
pub fn rules() -> &'static [RuleBlock] {
    use TriageLevel::{Critical, Mild, Moderate};

    static RULES: LazyLock<Vec<RuleBlock>> = LazyLock::new(|| {
        vec![
            RuleBlock {
                factor: Factor::Age,
                tiers: vec![
                    tier(
                        |v| v.age > 75.0 || v.age < 2.0,
                        explained(Critical, 0.3, |v| {
                            format!("Age {} increases priority (very young or elderly)", js_number(v.age))
                        }),
                    ),
                    tier(
                        |v| v.age > 65.0 || v.age < 18.0,
                        explained(Moderate, 0.2, |v| {
                            format!("Age {} requires careful monitoring", js_number(v.age))
                        }),
                    ),
                ],
                otherwise: silent(Mild, 0.1),
            },
            RuleBlock {
                factor: Factor::HeartRate,
                tiers: vec![
                    tier(
                        |v| v.heart_rate > 120.0 || v.heart_rate < 50.0,
                        explained(Critical, 0.4, |v| {
                            format!("Heart rate {} bpm is critically abnormal", js_number(v.heart_rate))
                        }),
                    ),
                    tier(
                        |v| v.heart_rate > 100.0 || v.heart_rate < 60.0,
                        explained(Moderate, 0.3, |v| {
                            format!(
                                "Heart rate {} bpm shows mild tachycardia/bradycardia",
                                js_number(v.heart_rate)
                            )
                        }),
                    ),
                ],
                otherwise: silent(Mild, 0.2),
            },
            RuleBlock {
                factor: Factor::BloodPressure,
                tiers: vec![
                    tier(
                        |v| {
                            v.systolic_bp > 180.0
                                || v.systolic_bp < 90.0
                                || v.diastolic_bp > 110.0
                                || v.diastolic_bp < 60.0
                        },
                        explained(Critical, 0.4, |v| {
                            format!(
                                "Blood pressure {}/{} mmHg is critically abnormal",
                                js_number(v.systolic_bp), js_number(v.diastolic_bp)
                            )
                        }),
                    ),
                    tier(
                        |v| v.systolic_bp > 140.0 || v.diastolic_bp > 90.0,
                        explained(Moderate, 0.3, |v| {
                            format!(
                                "Blood pressure {}/{} mmHg shows hypertension",
                                js_number(v.systolic_bp), js_number(v.diastolic_bp)
                            )
                        }),
                    ),
                ],
                otherwise: silent(Mild, 0.2),
            },
            RuleBlock {
                factor: Factor::Spo2,
                tiers: vec![
                    tier(
                        |v| v.spo2 < 90.0,
                        explained(Critical, 0.5, |v| {
                            format!("SpO₂ {}% indicates severe hypoxemia", js_number(v.spo2))
                        }),
                    ),
                    tier(
                        |v| v.spo2 < 95.0,
                        explained(Moderate, 0.4, |v| {
                            format!("SpO₂ {}% shows mild hypoxemia", js_number(v.spo2))
                        }),
                    ),
                ],
                otherwise: silent(Mild, 0.2),
            },
            RuleBlock {
                factor: Factor::RespiratoryRate,
                tiers: vec![
                    tier(
                        |v| v.respiratory_rate > 30.0 || v.respiratory_rate < 8.0,
                        explained(Critical, 0.3, |v| {
                            format!(
                                "Respiratory rate {} breaths/min is critically abnormal",
                                js_number(v.respiratory_rate)
                            )
                        }),
                    ),
                    tier(
                        |v| v.respiratory_rate > 24.0 || v.respiratory_rate < 12.0,
                        explained(Moderate, 0.2, |v| {
                            format!(
                                "Respiratory rate {} breaths/min shows tachypnea/bradypnea",
                                js_number(v.respiratory_rate)
                            )
                        }),
                    ),
                ],
                otherwise: silent(Mild, 0.1),
            },
            RuleBlock {
                factor: Factor::Temperature,
                tiers: vec![
                    tier(
                        |v| v.temperature > 39.5 || v.temperature < 35.0,
                        explained(Critical, 0.3, |v| {
                            format!(
                                "Temperature {}°C indicates severe fever/hypothermia",
                                js_number(v.temperature)
                            )
                        }),
                    ),
                    tier(
                        |v| v.temperature > 38.5 || v.temperature < 36.0,
                        explained(Moderate, 0.2, |v| {
                            format!("Temperature {}°C shows fever/mild hypothermia", js_number(v.temperature))
                        }),
                    ),
                ],
                otherwise: silent(Mild, 0.1),
            },
            RuleBlock {
                factor: Factor::SymptomSeverity,
                tiers: vec![
                    tier(
                        |v| v.symptom_severity >= 8.0,
                        explained(Critical, 0.4, |v| {
                            format!("Patient reports severe symptoms ({}/10)", js_number(v.symptom_severity))
                        }),
                    ),
                    tier(
                        |v| v.symptom_severity >= 5.0,
                        explained(Moderate, 0.3, |v| {
                            format!("Patient reports moderate symptoms ({}/10)", js_number(v.symptom_severity))
                        }),
                    ),
                ],
                // The only fallback that still explains itself.
                otherwise: explained(Mild, 0.2, |v| {
                    format!("Patient reports mild symptoms ({}/10)", js_number(v.symptom_severity))
                }),
            },
        ]
    });
    &RULES
}
