use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// A complete set of patient vital signs, ready for scoring.
///
/// Values are taken as reported. Nothing here enforces physiological bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientVitals {
    /// Years.
    pub age: f64,
    /// Beats per minute.
    pub heart_rate: f64,
    /// mmHg.
    pub systolic_bp: f64,
    /// mmHg.
    pub diastolic_bp: f64,
    /// Oxygen saturation, percent.
    pub spo2: f64,
    /// Breaths per minute.
    pub respiratory_rate: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Patient-reported, 1–10.
    pub symptom_severity: f64,
}

/// Patient vitals as submitted by the form. Any field may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientVitalsInput {
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub systolic_bp: Option<f64>,
    #[serde(default)]
    pub diastolic_bp: Option<f64>,
    #[serde(default)]
    pub spo2: Option<f64>,
    #[serde(default)]
    pub respiratory_rate: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub symptom_severity: Option<f64>,
}

impl PatientVitalsInput {
    /// Required fields, in the order they are checked.
    pub const REQUIRED_FIELDS: [&'static str; 8] = [
        "age",
        "heart_rate",
        "systolic_bp",
        "diastolic_bp",
        "spo2",
        "respiratory_rate",
        "temperature",
        "symptom_severity",
    ];

    /// Check that every vital sign is present. Reports the first missing one.
    pub fn validate(&self) -> Result<PatientVitals, ValidationError> {
        fn require(value: Option<f64>, field: &'static str) -> Result<f64, ValidationError> {
            value.ok_or(ValidationError::MissingField(field))
        }

        Ok(PatientVitals {
            age: require(self.age, "age")?,
            heart_rate: require(self.heart_rate, "heart_rate")?,
            systolic_bp: require(self.systolic_bp, "systolic_bp")?,
            diastolic_bp: require(self.diastolic_bp, "diastolic_bp")?,
            spo2: require(self.spo2, "spo2")?,
            respiratory_rate: require(self.respiratory_rate, "respiratory_rate")?,
            temperature: require(self.temperature, "temperature")?,
            symptom_severity: require(self.symptom_severity, "symptom_severity")?,
        })
    }
}

impl From<PatientVitals> for PatientVitalsInput {
    fn from(v: PatientVitals) -> Self {
        Self {
            age: Some(v.age),
            heart_rate: Some(v.heart_rate),
            systolic_bp: Some(v.systolic_bp),
            diastolic_bp: Some(v.diastolic_bp),
            spo2: Some(v.spo2),
            respiratory_rate: Some(v.respiratory_rate),
            temperature: Some(v.temperature),
            symptom_severity: Some(v.symptom_severity),
        }
    }
}
