use aws_sdk_s3::Client;
use uuid::Uuid;

use vitalflow_core::models::log::{NewTriageLog, TriageLog};
use vitalflow_core::s3_keys;

use crate::error::StorageError;
use crate::objects;

/// Append-only record of triage assessments.
///
/// The store assigns `id` and `created_at`. Readers see the newest records
/// first.
pub trait TriageLogStore: Send + Sync + 'static {
    /// Persist a new record and return it as stored.
    fn append(
        &self,
        entry: NewTriageLog,
    ) -> impl Future<Output = Result<TriageLog, StorageError>> + Send;

    /// The `limit` most recent records, ordered by `created_at` descending.
    fn recent(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<TriageLog>, StorageError>> + Send;
}

/// Triage logs as one JSON object per record in an S3 bucket.
#[derive(Clone)]
pub struct S3LogStore {
    client: Client,
    bucket: String,
}

impl S3LogStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl TriageLogStore for S3LogStore {
    async fn append(&self, entry: NewTriageLog) -> Result<TriageLog, StorageError> {
        let log = entry.into_log(Uuid::new_v4(), jiff::Timestamp::now());
        let key = s3_keys::triage_log(log.created_at, log.id);
        objects::put_json(&self.client, &self.bucket, &key, &log).await?;
        tracing::debug!(key = %key, "triage log written");
        Ok(log)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<TriageLog>, StorageError> {
        // Keys lead with an inverted creation time: the first page is the newest.
        let keys = objects::list_first_keys(
            &self.client,
            &self.bucket,
            s3_keys::TRIAGE_LOGS_PREFIX,
            limit,
        )
        .await?;

        let mut logs = Vec::with_capacity(keys.len());
        for key in &keys {
            match objects::get_json::<TriageLog>(&self.client, &self.bucket, key).await {
                Ok(log) => logs.push(log),
                // Listed but gone before we could read it.
                Err(StorageError::NotFound { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(logs)
    }
}
