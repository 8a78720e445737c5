use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::Deserialize;

use vitalflow_core::error::ValidationError;
use vitalflow_core::models::log::NewTriageLog;
use vitalflow_core::models::triage::TriageResult;
use vitalflow_core::models::vitals::{PatientVitals, PatientVitalsInput};
use vitalflow_storage::TriageLogStore;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub patient: Option<PatientVitalsInput>,
}

/// Score a patient's vitals and record the assessment.
///
/// The body is parsed by hand so that malformed JSON gets the same 500
/// error shape as missing vitals.
pub async fn predict_triage<S: TriageLogStore>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<TriageResult>, ApiError> {
    let req: PredictRequest = serde_json::from_slice(&body)?;
    let patient = req.patient.ok_or(ValidationError::MissingField("patient"))?;

    tracing::info!(patient = ?patient, "received patient data");

    let vitals = patient.validate()?;
    let result = vitalflow_scoring::score_vitals(&vitals);

    tracing::info!(
        triage_level = %result.triage_level,
        critical = result.probabilities.critical,
        moderate = result.probabilities.moderate,
        mild = result.probabilities.mild,
        "prediction result"
    );

    record_assessment(&state, vitals, &result).await;

    Ok(Json(result))
}

/// Best-effort append to the log store. Failures are logged, never returned.
async fn record_assessment<S: TriageLogStore>(
    state: &AppState<S>,
    vitals: PatientVitals,
    result: &TriageResult,
) {
    let entry = NewTriageLog::new(vitals, result);
    match tokio::time::timeout(state.log_timeout, state.store.append(entry)).await {
        Ok(Ok(log)) => tracing::debug!(log_id = %log.id, "triage log recorded"),
        Ok(Err(e)) => tracing::error!(error = %e, "triage log insert failed"),
        Err(_) => tracing::error!(
            timeout_ms = state.log_timeout.as_millis() as u64,
            "triage log insert timed out"
        ),
    }
}
