use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use vitalflow_core::models::log::{NewTriageLog, TriageLog};

use crate::error::StorageError;
use crate::log_store::TriageLogStore;

/// In-process triage log. Clones share the same records.
#[derive(Clone, Default)]
pub struct MemoryLogStore {
    logs: Arc<Mutex<Vec<TriageLog>>>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.logs.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.logs.lock().await.is_empty()
    }
}

impl TriageLogStore for MemoryLogStore {
    async fn append(&self, entry: NewTriageLog) -> Result<TriageLog, StorageError> {
        let log = entry.into_log(Uuid::new_v4(), jiff::Timestamp::now());
        self.logs.lock().await.push(log.clone());
        Ok(log)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<TriageLog>, StorageError> {
        let logs = self.logs.lock().await;
        // Walk newest-appended first so equal timestamps keep append order reversed.
        let mut recent: Vec<TriageLog> = logs.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);
        Ok(recent)
    }
}
