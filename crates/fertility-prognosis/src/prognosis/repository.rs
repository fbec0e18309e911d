use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serialized evaluation stored under its generated key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    pub key: String,
    /// JSON text of the `EvaluationState`.
    pub payload: String,
    pub stored_at: DateTime<Utc>,
}

/// Key/value blob store for computed reports.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, record: StoredReport) -> Result<StoredReport, RepositoryError>;
    fn fetch(&self, key: &str) -> Result<Option<StoredReport>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("report already exists")]
    Conflict,
    #[error("report not found")]
    NotFound,
    #[error("report store unavailable: {0}")]
    Unavailable(String),
}
