use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use vitalflow_core::error::ValidationError;
use vitalflow_storage::error::StorageError;

const PREDICTION_FAILED: &str = "Failed to process triage prediction";
const LOGS_FAILED: &str = "Failed to load triage logs";

/// Unified API error type for all route handlers.
///
/// Scoring and store failures are 500s: the web client expects that status
/// for any scoring failure, including missing vitals. A malformed dashboard
/// query is a 400. All of them share the `{error, details}` body.
#[derive(Debug)]
pub enum ApiError {
    /// The scoring request could not be processed.
    Prediction(String),
    /// The log store could not be read.
    Storage(StorageError),
    /// The dashboard query string could not be parsed.
    InvalidQuery(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    details: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Prediction(msg) => {
                tracing::error!("error in predict-triage: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: msg,
                        details: PREDICTION_FAILED,
                    },
                )
            }
            ApiError::Storage(e) => {
                tracing::error!("error reading triage logs: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: e.to_string(),
                        details: LOGS_FAILED,
                    },
                )
            }
            ApiError::InvalidQuery(msg) => {
                tracing::warn!("invalid triage log query: {msg}");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        error: msg,
                        details: LOGS_FAILED,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Prediction(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Prediction(e.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Storage(e)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::InvalidQuery(e.body_text())
    }
}
