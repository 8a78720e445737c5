//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the VitalFlow S3 bucket.

use uuid::Uuid;

pub const TRIAGE_LOGS_PREFIX: &str = "triage-logs/";

/// Key for a single triage log record.
///
/// The key leads with the creation time subtracted from `u64::MAX`,
/// zero-padded, so that S3's ascending listing returns the newest records
/// first. Times before the epoch sort as the epoch.
pub fn triage_log(created_at: jiff::Timestamp, id: Uuid) -> String {
    let millis = u64::try_from(created_at.as_millisecond()).unwrap_or(0);
    format!("{TRIAGE_LOGS_PREFIX}{:020}-{id}.json", u64::MAX - millis)
}
