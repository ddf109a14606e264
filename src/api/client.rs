//! Authenticated transport to the HostDB HTTP API.
//!
//! Writes (`PUT`/`POST`) are skipped and reported as success when no
//! password is configured.

use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::responses::{GetRecordsResponse, PostRecordsResponse, PutRecordResponse};
use crate::error::{Error, Result};
use crate::record::{Record, RecordSet};

/// Base URL used when `HOSTDB_URL` is unset or empty.
pub const DEFAULT_URL: &str = "https://hostdb.pdxfixit.com/v0";
/// User used when `HOSTDB_USER` is unset or empty.
pub const DEFAULT_USER: &str = "writer";

/// Where and as whom to talk to HostDB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, including the version segment.
    pub url: String,
    /// Basic-auth user.
    pub user: String,
    /// Basic-auth password; empty disables writes.
    pub pass: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user: DEFAULT_USER.to_string(),
            pass: String::new(),
        }
    }
}

impl ClientConfig {
    /// Build a config, substituting defaults for an empty URL or user.
    pub fn new(url: impl Into<String>, user: impl Into<String>, pass: impl Into<String>) -> Self {
        let url = url.into();
        let user = user.into();
        Self {
            url: if url.is_empty() { DEFAULT_URL.to_string() } else { url },
            user: if user.is_empty() { DEFAULT_USER.to_string() } else { user },
            pass: pass.into(),
        }
    }

    /// Read `HOSTDB_URL`, `HOSTDB_USER` and `HOSTDB_PASS`.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        let config = Self::new(var("HOSTDB_URL"), var("HOSTDB_USER"), var("HOSTDB_PASS"));
        config.base_url()?;
        Ok(config)
    }

    /// True when a password is configured.
    pub fn has_credentials(&self) -> bool {
        !self.pass.is_empty()
    }

    fn base_url(&self) -> Result<Url> {
        Url::parse(&self.url).map_err(|_| Error::InvalidUrl(self.url.clone()))
    }
}

/// HostDB API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Build a client. The server is typically reached over self-signed
    /// HTTPS, so certificate validation is disabled.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.base_url()?;
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { http, config })
    }

    /// Client configured from the environment; see [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.url.trim_end_matches('/'))
    }

    async fn request<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "HostDB request");

        let mut request = self.http.request(method, &url);
        if self.config.has_credentials() {
            request = request.basic_auth(&self.config.user, Some(&self.config.pass));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), body = %text, "HostDB request failed");
            return Err(Error::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// `PUT` a single record under its id.
    ///
    /// `unique_identifier` only labels log lines; it defaults to the record type.
    pub async fn put_record(&self, record: &Record, unique_identifier: &str) -> Result<()> {
        let label = if unique_identifier.is_empty() {
            record.record_type.as_str()
        } else {
            unique_identifier
        };
        if !self.config.has_credentials() {
            tracing::warn!(label, "no password, canceling request");
            return Ok(());
        }

        let response: PutRecordResponse = self
            .request(Method::PUT, &format!("/records/{}", record.id), Some(record))
            .await?;
        if !response.ok {
            return Err(Error::Rejected(format!(
                "failed to save record {}",
                response.id
            )));
        }

        tracing::info!(record_type = %record.record_type, label, "1 record sent to HostDB");
        Ok(())
    }

    /// `POST` a batch of records.
    ///
    /// `unique_query` is appended as the query string so requests can be told
    /// apart in server logs; it defaults to `type=<record type>`.
    pub async fn post_record_set(&self, set: &RecordSet, unique_query: &str) -> Result<()> {
        let query = if unique_query.is_empty() {
            format!("type={}", set.record_type)
        } else {
            unique_query.trim_start_matches('?').to_string()
        };
        if !self.config.has_credentials() {
            tracing::warn!(query = %query, "no password, canceling request");
            return Ok(());
        }

        tracing::info!(
            count = set.records.len(),
            record_type = %set.record_type,
            "sending records to HostDB"
        );

        let response: PostRecordsResponse = self
            .request(Method::POST, &format!("/records/?{query}"), Some(set))
            .await?;
        if !response.ok {
            return Err(Error::Rejected(response.error));
        }

        tracing::info!(
            count = set.records.len(),
            record_type = %set.record_type,
            "sent records to HostDB"
        );
        Ok(())
    }

    /// `GET` records matching `query`, e.g. `type=openstack&flavor=m1.small`.
    pub async fn get_records(&self, query: &str) -> Result<GetRecordsResponse> {
        let path = if query.is_empty() {
            "/records/".to_string()
        } else {
            format!("/records/?{}", query.trim_start_matches('?'))
        };
        self.request::<(), _>(Method::GET, &path, None).await
    }
}
