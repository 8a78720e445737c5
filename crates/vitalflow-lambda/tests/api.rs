use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use vitalflow_core::models::log::{NewTriageLog, TriageLog};
use vitalflow_lambda::config::ServiceConfig;
use vitalflow_lambda::router;
use vitalflow_lambda::state::AppState;
use vitalflow_storage::error::StorageError;
use vitalflow_storage::{MemoryLogStore, TriageLogStore};

/// A store whose every call fails.
struct BrokenStore;

impl TriageLogStore for BrokenStore {
    async fn append(&self, _entry: NewTriageLog) -> Result<TriageLog, StorageError> {
        Err(StorageError::Unavailable("bucket unreachable".to_string()))
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<TriageLog>, StorageError> {
        Err(StorageError::Unavailable("bucket unreachable".to_string()))
    }
}

/// A store that never answers an append.
struct StalledStore;

impl TriageLogStore for StalledStore {
    async fn append(&self, _entry: NewTriageLog) -> Result<TriageLog, StorageError> {
        std::future::pending().await
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<TriageLog>, StorageError> {
        Ok(Vec::new())
    }
}

fn app<S: TriageLogStore>(store: S) -> Router {
    router(AppState::new(store, &ServiceConfig::default()))
}

fn nominal_patient() -> Value {
    json!({
        "age": 30,
        "heart_rate": 75,
        "systolic_bp": 115,
        "diastolic_bp": 75,
        "spo2": 98,
        "respiratory_rate": 16,
        "temperature": 36.8,
        "symptom_severity": 2
    })
}

fn predict(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict-triage")
        .header("content-type", "application/json")
        .header("origin", "https://triage.example.org")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn scores_nominal_patient() {
    let store = MemoryLogStore::new();
    let response = app(store.clone())
        .oneshot(predict(json!({ "patient": nominal_patient() }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );

    let body = json_body(response).await;
    assert_eq!(body["triage_level"], "Mild");
    assert_eq!(body["recommended_wait"], 120);
    assert_eq!(
        body["recommended_action"],
        "Standard assessment, can wait for available resources"
    );
    assert_eq!(body["probabilities"]["mild"], 1.0);
    assert_eq!(
        body["explanation"],
        json!(["Patient reports mild symptoms (2/10)"])
    );

    let logs = store.recent(20).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].patient.temperature, 36.8);
}

#[tokio::test]
async fn scores_critical_patient() {
    let patient = json!({
        "age": 80,
        "heart_rate": 130,
        "systolic_bp": 190,
        "diastolic_bp": 95,
        "spo2": 85,
        "respiratory_rate": 32,
        "temperature": 40,
        "symptom_severity": 9
    });
    let response = app(MemoryLogStore::new())
        .oneshot(predict(json!({ "patient": patient }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["triage_level"], "Critical");
    assert_eq!(body["recommended_wait"], 0);
    assert_eq!(body["explanation"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn missing_field_is_a_500_naming_the_field() {
    let mut patient = nominal_patient();
    patient.as_object_mut().unwrap().remove("spo2");

    let store = MemoryLogStore::new();
    let response = app(store.clone())
        .oneshot(predict(json!({ "patient": patient }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    assert_eq!(
        json_body(response).await,
        json!({
            "error": "Missing required field: spo2",
            "details": "Failed to process triage prediction"
        })
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn null_field_is_missing() {
    let mut patient = nominal_patient();
    patient["symptom_severity"] = Value::Null;

    let response = app(MemoryLogStore::new())
        .oneshot(predict(json!({ "patient": patient }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Missing required field: symptom_severity");
}

#[tokio::test]
async fn missing_patient_is_rejected() {
    let response = app(MemoryLogStore::new())
        .oneshot(predict("{}".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Missing required field: patient");
}

#[tokio::test]
async fn malformed_body_is_a_500() {
    let response = app(MemoryLogStore::new())
        .oneshot(predict("not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["details"], "Failed to process triage prediction");
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn negative_age_is_scored() {
    let mut patient = nominal_patient();
    patient["age"] = json!(-3);

    let response = app(MemoryLogStore::new())
        .oneshot(predict(json!({ "patient": patient }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body["explanation"][0],
        "Age -3 increases priority (very young or elderly)"
    );
}

#[tokio::test]
async fn log_failure_does_not_fail_scoring() {
    let response = app(BrokenStore)
        .oneshot(predict(json!({ "patient": nominal_patient() }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["triage_level"], "Mild");
}

#[tokio::test]
async fn stalled_log_store_does_not_block_scoring() {
    let config = ServiceConfig {
        log_timeout: Duration::from_millis(50),
        ..ServiceConfig::default()
    };
    let app = router(AppState::new(StalledStore, &config));

    let response = tokio::time::timeout(
        Duration::from_secs(5),
        app.oneshot(predict(json!({ "patient": nominal_patient() }).to_string())),
    )
    .await
    .expect("request should finish once the log write times out")
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn preflight_is_answered_with_permissive_headers() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/predict-triage")
        .header("origin", "https://triage.example.org")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,apikey")
        .body(Body::empty())
        .unwrap();

    let response = app(MemoryLogStore::new()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    let allowed = headers["access-control-allow-headers"].to_str().unwrap();
    for header in ["authorization", "x-client-info", "apikey", "content-type"] {
        assert!(allowed.contains(header), "{header} missing from {allowed}");
    }
}

#[tokio::test]
async fn dashboard_lists_newest_first() {
    let store = MemoryLogStore::new();
    let app = app(store.clone());

    for age in [20, 70, 80] {
        let mut patient = nominal_patient();
        patient["age"] = json!(age);
        let response = app
            .clone()
            .oneshot(predict(json!({ "patient": patient }).to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let body = json_body(app.clone().oneshot(get("/triage-logs")).await.unwrap()).await;
    let ages: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|log| log["patient"]["age"].as_f64().unwrap())
        .collect();
    assert_eq!(ages, vec![80.0, 70.0, 20.0]);

    let limited = json_body(app.oneshot(get("/triage-logs?limit=2")).await.unwrap()).await;
    assert_eq!(limited.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn dashboard_stats_count_levels() {
    let store = MemoryLogStore::new();
    let app = app(store);

    let critical = json!({
        "age": 80, "heart_rate": 130, "systolic_bp": 190, "diastolic_bp": 95,
        "spo2": 85, "respiratory_rate": 32, "temperature": 40, "symptom_severity": 9
    });
    let moderate = json!({
        "age": 30, "heart_rate": 105, "systolic_bp": 115, "diastolic_bp": 75,
        "spo2": 92, "respiratory_rate": 16, "temperature": 36.8, "symptom_severity": 6
    });
    for patient in [critical, moderate, nominal_patient(), nominal_patient()] {
        app.clone()
            .oneshot(predict(json!({ "patient": patient }).to_string()))
            .await
            .unwrap();
    }

    let stats = json_body(app.oneshot(get("/triage-logs/stats")).await.unwrap()).await;
    assert_eq!(
        stats,
        json!({ "total": 4, "critical": 1, "moderate": 1, "mild": 2 })
    );
}

#[tokio::test]
async fn dashboard_store_failure_is_a_500() {
    let response = app(BrokenStore).oneshot(get("/triage-logs")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["details"], "Failed to load triage logs");
    assert_eq!(body["error"], "log store unavailable: bucket unreachable");
}

#[tokio::test]
async fn health_check() {
    let response = app(MemoryLogStore::new()).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn non_numeric_limit_gets_json_error() {
    let response = app(MemoryLogStore::new())
        .oneshot(get("/triage-logs?limit=abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
    let body = json_body(response).await;
    assert_eq!(body["details"], "Failed to load triage logs");
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn negative_limit_on_stats_gets_json_error() {
    let response = app(MemoryLogStore::new())
        .oneshot(get("/triage-logs/stats?limit=-1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["details"], "Failed to load triage logs");
}
