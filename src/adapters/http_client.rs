//! Shared plumbing for the remote classification service.
//!
//! Both the classifier and the audit log talk to the same service, so they
//! share one base URL, one timeout and one way of reading error bodies.

use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

use crate::config::ServiceConfig;

/// Connection settings for the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteServiceConfig {
    /// Base URL without a trailing slash (default: http://localhost:8000).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl RemoteServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Builds a reqwest client with the configured timeout.
    pub fn build_client(&self) -> Result<Client, HttpClientError> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| HttpClientError(e.to_string()))
    }
}

impl Default for RemoteServiceConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

impl From<&ServiceConfig> for RemoteServiceConfig {
    fn from(config: &ServiceConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }
}

/// The HTTP client could not be constructed.
#[derive(Debug, thiserror::Error)]
#[error("failed to create HTTP client: {0}")]
pub struct HttpClientError(pub String);

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Drains a non-success response and returns its `detail` field, if any.
///
/// String details are returned as-is; structured details (validation error
/// lists) are rendered as compact JSON.
pub(crate) async fn read_error_detail(response: Response) -> Option<String> {
    let body = response.text().await.unwrap_or_default();
    parse_error_detail(&body)
}

pub(crate) fn parse_error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        serde_json::Value::String(_) | serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
