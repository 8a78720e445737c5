use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Upper bound on how many log records one dashboard request may read.
pub const MAX_DASHBOARD_LIMIT: usize = 100;

/// Where scored assessments are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStoreKind {
    S3,
    Memory,
}

impl FromStr for LogStoreKind {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(LogStoreKind::S3),
            "memory" => Ok(LogStoreKind::Memory),
            other => Err(eyre::eyre!("unknown log store '{other}' (expected 's3' or 'memory')")),
        }
    }
}

/// Service settings, read once at start-up.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub log_store: LogStoreKind,
    pub bucket: String,
    /// Records shown on the dashboard when the request names no limit.
    pub dashboard_limit: usize,
    /// How long a scoring request waits on the log store before giving up on the write.
    pub log_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_store: LogStoreKind::S3,
            bucket: "vitalflow".to_string(),
            dashboard_limit: 20,
            log_timeout: Duration::from_millis(2000),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut config = Self::default();

        if let Some(kind) = lookup("VITALFLOW_LOG_STORE") {
            config.log_store = kind.parse()?;
        }
        if let Some(bucket) = lookup("VITALFLOW_BUCKET") {
            config.bucket = bucket;
        }
        if let Some(limit) = lookup("VITALFLOW_DASHBOARD_LIMIT") {
            let limit: usize = limit
                .parse()
                .map_err(|e| eyre::eyre!("invalid VITALFLOW_DASHBOARD_LIMIT '{limit}': {e}"))?;
            if !(1..=MAX_DASHBOARD_LIMIT).contains(&limit) {
                eyre::bail!("VITALFLOW_DASHBOARD_LIMIT must be between 1 and {MAX_DASHBOARD_LIMIT}");
            }
            config.dashboard_limit = limit;
        }
        if let Some(ms) = lookup("VITALFLOW_LOG_TIMEOUT_MS") {
            let ms: u64 = ms
                .parse()
                .map_err(|e| eyre::eyre!("invalid VITALFLOW_LOG_TIMEOUT_MS '{ms}': {e}"))?;
            config.log_timeout = Duration::from_millis(ms);
        }

        if config.log_store == LogStoreKind::S3 && config.bucket.is_empty() {
            eyre::bail!("VITALFLOW_BUCKET must not be empty when the S3 log store is used");
        }

        Ok(config)
    }
}
