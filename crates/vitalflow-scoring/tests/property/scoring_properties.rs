use proptest::prelude::*;

use vitalflow_core::models::triage::TriageLevel;
use vitalflow_core::models::vitals::{PatientVitals, PatientVitalsInput};
use vitalflow_scoring::{score, score_vitals, MAX_EXPLANATIONS};

fn any_vitals() -> impl Strategy<Value = PatientVitals> {
    (
        -10.0..120.0f64,
        0.0..250.0f64,
        0.0..260.0f64,
        0.0..160.0f64,
        0.0..100.0f64,
        0.0..60.0f64,
        30.0..45.0f64,
        0.0..12.0f64,
    )
        .prop_map(
            |(
                age,
                heart_rate,
                systolic_bp,
                diastolic_bp,
                spo2,
                respiratory_rate,
                temperature,
                symptom_severity,
            )| PatientVitals {
                age,
                heart_rate,
                systolic_bp,
                diastolic_bp,
                spo2,
                respiratory_rate,
                temperature,
                symptom_severity,
            },
        )
}

proptest! {
    #[test]
    fn probabilities_sum_to_one(vitals in any_vitals()) {
        let p = score_vitals(&vitals).probabilities;
        let sum = p.critical + p.moderate + p.mild;
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum was {}", sum);
    }

    #[test]
    fn probabilities_are_in_unit_interval(vitals in any_vitals()) {
        let p = score_vitals(&vitals).probabilities;
        for value in [p.critical, p.moderate, p.mild] {
            prop_assert!((0.0..=1.0).contains(&value), "{} out of range", value);
        }
    }

    #[test]
    fn explanation_is_bounded(vitals in any_vitals()) {
        let result = score_vitals(&vitals);
        prop_assert!(!result.explanation.is_empty());
        prop_assert!(result.explanation.len() <= MAX_EXPLANATIONS);
    }

    #[test]
    fn scoring_is_deterministic(vitals in any_vitals()) {
        prop_assert_eq!(score_vitals(&vitals), score_vitals(&vitals));
    }

    #[test]
    fn wait_and_action_follow_level(vitals in any_vitals()) {
        let result = score_vitals(&vitals);
        prop_assert_eq!(result.recommended_wait, result.triage_level.recommended_wait());
        prop_assert_eq!(
            result.recommended_action.as_str(),
            result.triage_level.recommended_action()
        );
        prop_assert!([0, 30, 120].contains(&result.recommended_wait));
    }

    #[test]
    fn selected_level_clears_threshold(vitals in any_vitals()) {
        let result = score_vitals(&vitals);
        match result.triage_level {
            TriageLevel::Critical => prop_assert!(result.probabilities.critical > 0.4),
            TriageLevel::Moderate => {
                prop_assert!(result.probabilities.critical <= 0.4);
                prop_assert!(result.probabilities.moderate > 0.4);
            }
            TriageLevel::Mild => {
                prop_assert!(result.probabilities.critical <= 0.4);
                prop_assert!(result.probabilities.moderate <= 0.4);
            }
        }
    }

    #[test]
    fn any_missing_field_is_reported(vitals in any_vitals(), index in 0usize..8) {
        let mut input = PatientVitalsInput::from(vitals);
        let slot = match index {
            0 => &mut input.age,
            1 => &mut input.heart_rate,
            2 => &mut input.systolic_bp,
            3 => &mut input.diastolic_bp,
            4 => &mut input.spo2,
            5 => &mut input.respiratory_rate,
            6 => &mut input.temperature,
            _ => &mut input.symptom_severity,
        };
        *slot = None;

        let err = score(&input).unwrap_err();
        prop_assert_eq!(err.field(), PatientVitalsInput::REQUIRED_FIELDS[index]);
    }
}
