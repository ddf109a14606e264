use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Error carried by a failed API request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code.
    pub code: u16,
    /// Human-readable reason.
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ErrorResponse {}

/// Bare `{"error": "..."}` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenericError {
    /// Error text.
    pub error: String,
}

/// Catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCatalogResponse {
    /// Number of catalog entries.
    pub count: i64,
    /// Server-side query duration.
    pub query_time: String,
    /// Distinct values.
    pub catalog: Vec<String>,
}

/// Catalog listing with per-value record counts (`?count`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCatalogQuantityResponse {
    /// Number of catalog entries.
    pub count: i64,
    /// Server-side query duration.
    pub query_time: String,
    /// Distinct value → number of records.
    pub catalog: BTreeMap<String, i64>,
}

/// Health check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetHealthResponse {
    /// Application status.
    pub app: String,
    /// Database status.
    pub db: String,
}

/// Query results keyed by record id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetRecordsResponse {
    /// Number of records returned.
    pub count: i64,
    /// Server-side query duration.
    pub query_time: String,
    /// Matching records.
    pub records: BTreeMap<String, Record>,
}

/// Store statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetStatsResponse {
    /// Server host name.
    pub hostname: String,
    /// Records stored.
    pub total_records: i64,
    /// Timestamp of the newest record.
    pub newest_record: String,
    /// Timestamp of the oldest record.
    pub oldest_record: String,
    /// Committer → last submission time.
    #[serde(rename = "lastseen_collectors")]
    pub last_seen_collectors: BTreeMap<String, String>,
}

/// Build information of the running server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerVersion {
    /// Release version.
    pub version: String,
    /// API version served.
    pub api_version: String,
    /// Source commit.
    pub commit: String,
    /// Build date.
    pub date: String,
    /// CI build link.
    pub build_url: String,
    /// Toolchain used for the build.
    #[serde(rename = "go_version")]
    pub toolchain_version: String,
}

/// Database server version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MariadbVersion {
    /// Version string reported by the database.
    pub version: String,
}

/// Version endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetVersionResponse {
    /// Server build.
    pub app: ServerVersion,
    /// Database build.
    pub db: MariadbVersion,
}

/// Answer to a record-set POST.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRecordsResponse {
    /// Whether every record was stored.
    pub ok: bool,
    /// Failure reason or processing summary.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// Answer to a single-record PUT.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PutRecordResponse {
    /// Id the record was stored under.
    pub id: String,
    /// Whether the record was stored.
    pub ok: bool,
}
