//! vitalflow-lambda
//!
//! HTTP surface of the triage service: the scoring endpoint used by the
//! assessment form and the read endpoints behind the dashboard.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};

use vitalflow_storage::TriageLogStore;

use state::AppState;

pub fn router<S: TriageLogStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/predict-triage", post(routes::predict::predict_triage::<S>))
        .route("/triage-logs", get(routes::logs::list_triage_logs::<S>))
        .route("/triage-logs/stats", get(routes::logs::triage_stats::<S>))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(middleware::cors::cors_layer())
        .with_state(state)
}
