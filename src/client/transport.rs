//! Transport seam for the advice API.
//!
//! [`Transport`] is the injected HTTP-call abstraction: the high-level
//! client only sees JSON in and JSON out. [`HttpTransport`] is the
//! production implementation over reqwest; tests substitute scripted
//! doubles via [`crate::client::LukmanClient::with_transport`].

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{LukmanError, Result};

/// Injected HTTP-call abstraction against the advice API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` with the given query parameters, returning parsed JSON.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value>;

    /// POST a JSON body to `path`, returning parsed JSON.
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;
}

/// HTTP transport over reqwest with a fixed per-request timeout.
pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for the given base URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| LukmanError::Transport(format!("failed to read response body: {e}")));
        }
        let body = response.text().await.unwrap_or_default();
        Err(LukmanError::Api {
            status: status.as_u16(),
            message: error_detail(status.as_u16(), &body),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        debug!(path = %path, "GET request");
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request
            .send()
            .await
            .map_err(|e| LukmanError::Transport(format!("GET {path} failed: {e}")))?;
        Self::handle(response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        debug!(path = %path, "POST request");
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| LukmanError::Transport(format!("POST {path} failed: {e}")))?;
        Self::handle(response).await
    }
}

/// Extract a user-facing message from an error response body.
///
/// The backend reports failures as `{"detail": "..."}` (FastAPI shape).
/// Falls back to the raw body text, then to a generic status message.
fn error_detail(status: u16, body: &str) -> String {
    if let Some(detail) = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["detail"].as_str().map(String::from))
    {
        return detail;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed with status {status}")
    } else {
        trimmed.to_string()
    }
}
