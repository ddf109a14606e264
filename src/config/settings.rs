use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::query_params::QueryParam;
use crate::error::Result;

/// Everything needed to run against a HostDB deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// HostDB server settings.
    pub hostdb: ServerConfig,
    /// Backing database connection.
    pub mariadb: MariadbConfig,
    /// API surface settings.
    pub api: ApiConfig,
}

impl GlobalConfig {
    /// Parse a configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// HostDB server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Password expected from writers.
    pub pass: String,
    /// Public base URL.
    pub url: String,
    /// Verbose request logging.
    pub debug: bool,
    /// New Relic application name.
    #[serde(rename = "newrelic_appname")]
    pub newrelic_app_name: String,
    /// New Relic license key.
    #[serde(rename = "newrelic_license")]
    pub newrelic_license_key: String,
}

/// Connection parameters for the MariaDB backing store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MariadbConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Schema name.
    pub db: String,
    /// Login user.
    pub user: String,
    /// Login password.
    pub pass: String,
    /// Extra driver parameters, each `key=value`.
    pub params: Vec<String>,
}

impl MariadbConfig {
    /// Driver connection string: `user:pass@tcp(host:port)/db?p1&p2`.
    pub fn dsn(&self) -> String {
        let mut dsn = format!(
            "{}:{}@tcp({}:{})/{}",
            self.user, self.pass, self.host, self.port, self.db
        );
        if !self.params.is_empty() {
            dsn.push('?');
            dsn.push_str(&self.params.join("&"));
        }
        dsn
    }
}

/// API version selection plus per-version settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Active API version, e.g. `v0`.
    pub version: String,
    /// Version 0 settings.
    pub v0: ApiV0Config,
}

/// Settings for version 0 of the HTTP API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiV0Config {
    /// Required context fields, per record type.
    pub context_fields: BTreeMap<String, Vec<String>>,
    /// Page size when a request sets no limit.
    pub default_limit: i64,
    /// Fields shown by the list endpoint.
    pub list_fields: Vec<String>,
    /// Query parameter → record type → data location.
    pub query_params: BTreeMap<String, BTreeMap<String, QueryParam>>,
}
