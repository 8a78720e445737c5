use std::sync::Arc;
use std::time::Duration;

use vitalflow_storage::TriageLogStore;

use crate::config::ServiceConfig;

/// Shared application state, injected into all route handlers via Axum state.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub dashboard_limit: usize,
    pub log_timeout: Duration,
}

impl<S: TriageLogStore> AppState<S> {
    pub fn new(store: S, config: &ServiceConfig) -> Self {
        Self {
            store: Arc::new(store),
            dashboard_limit: config.dashboard_limit,
            log_timeout: config.log_timeout,
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            dashboard_limit: self.dashboard_limit,
            log_timeout: self.log_timeout,
        }
    }
}
