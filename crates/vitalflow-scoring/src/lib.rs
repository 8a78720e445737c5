//! vitalflow-scoring
//!
//! Rule-based triage scoring. Pure computation — no I/O, no shared state.
//! Seven weighted rule blocks feed three category accumulators, which are
//! normalized into probabilities and mapped onto a triage level.

pub mod format;
pub mod rules;
pub mod scoring;

use vitalflow_core::error::ValidationError;
use vitalflow_core::models::triage::{Probabilities, TriageLevel, TriageResult};
use vitalflow_core::models::vitals::{PatientVitals, PatientVitalsInput};

use scoring::{CategoryScores, Evaluation};

/// Probability a category must exceed to be selected.
pub const LEVEL_THRESHOLD: f64 = 0.4;

/// Explanations kept in a [`TriageResult`].
pub const MAX_EXPLANATIONS: usize = 3;

/// Run every rule block over the vitals, in table order.
pub fn evaluate(vitals: &PatientVitals) -> Evaluation {
    let mut scores = CategoryScores::default();
    let contributions: Vec<_> = rules::rules()
        .iter()
        .map(|block| {
            let contribution = block.evaluate(vitals);
            scores.add(contribution.category, contribution.weight);
            contribution
        })
        .collect();

    Evaluation {
        scores,
        contributions,
    }
}

/// Pick a triage level from normalized probabilities.
///
/// Critical is checked first, then Moderate. Mild is what remains; it is never
/// tested against the threshold itself.
pub fn classify(probabilities: &Probabilities) -> TriageLevel {
    if probabilities.critical > LEVEL_THRESHOLD {
        TriageLevel::Critical
    } else if probabilities.moderate > LEVEL_THRESHOLD {
        TriageLevel::Moderate
    } else {
        TriageLevel::Mild
    }
}

/// Score a complete set of vitals.
pub fn score_vitals(vitals: &PatientVitals) -> TriageResult {
    let evaluation = evaluate(vitals);
    let probabilities = evaluation.scores.normalize();
    let triage_level = classify(&probabilities);

    TriageResult {
        triage_level,
        probabilities,
        recommended_wait: triage_level.recommended_wait(),
        recommended_action: triage_level.recommended_action().to_string(),
        explanation: evaluation
            .explanations()
            .take(MAX_EXPLANATIONS)
            .map(str::to_string)
            .collect(),
    }
}

/// Validate a submitted record and score it.
pub fn score(input: &PatientVitalsInput) -> Result<TriageResult, ValidationError> {
    let vitals = input.validate()?;
    Ok(score_vitals(&vitals))
}
