use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;

use vitalflow_core::models::log::{TriageLog, TriageStats};
use vitalflow_storage::TriageLogStore;

use crate::config::MAX_DASHBOARD_LIMIT;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LogQuery {
    pub limit: Option<usize>,
}

impl LogQuery {
    fn window<S>(&self, state: &AppState<S>) -> usize {
        self.limit
            .unwrap_or(state.dashboard_limit)
            .clamp(1, MAX_DASHBOARD_LIMIT)
    }
}

/// Most recent assessments, newest first.
pub async fn list_triage_logs<S: TriageLogStore>(
    State(state): State<AppState<S>>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> Result<Json<Vec<TriageLog>>, ApiError> {
    let Query(query) = query?;
    let logs = state.store.recent(query.window(&state)).await?;
    Ok(Json(logs))
}

/// Counts by triage level over the same window the dashboard lists.
pub async fn triage_stats<S: TriageLogStore>(
    State(state): State<AppState<S>>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> Result<Json<TriageStats>, ApiError> {
    let Query(query) = query?;
    let logs = state.store.recent(query.window(&state)).await?;
    Ok(Json(TriageStats::from_logs(&logs)))
}
