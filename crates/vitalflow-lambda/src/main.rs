use tracing_subscriber::EnvFilter;

use vitalflow_lambda::config::{LogStoreKind, ServiceConfig};
use vitalflow_lambda::state::AppState;
use vitalflow_storage::{MemoryLogStore, S3LogStore, TriageLogStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        log_store = ?config.log_store,
        bucket = %config.bucket,
        dashboard_limit = config.dashboard_limit,
        "starting triage service"
    );

    match config.log_store {
        LogStoreKind::S3 => {
            let s3 = vitalflow_storage::client::build_client().await;
            let store = S3LogStore::new(s3, config.bucket.clone());
            serve(AppState::new(store, &config)).await
        }
        LogStoreKind::Memory => {
            tracing::warn!("in-memory log store: assessments are lost when the process exits");
            serve(AppState::new(MemoryLogStore::new(), &config)).await
        }
    }
}

async fn serve<S: TriageLogStore>(state: AppState<S>) -> eyre::Result<()> {
    lambda_http::run(vitalflow_lambda::router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
