//! HTTP client for the Cloud Code generation endpoint.
//!
//! One POST per call, bounded by the configured timeout, never retried.

use crate::core::config::UpstreamConfig;
use crate::core::logging::get_request_id;
use crate::core::{AppError, Result};
use crate::services::envelope::UpstreamEnvelope;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::time::Duration;

/// `User-Agent` presented to the backend.
pub const UPSTREAM_USER_AGENT: &str = "antigravity/1.15.8";

/// `X-Goog-Api-Client` presented to the backend.
pub const GOOG_API_CLIENT: &str = "google-cloud-sdk vscode_cloudshelleditor/0.1";

const X_GOOG_API_CLIENT: &str = "x-goog-api-client";
const CLIENT_METADATA: &str = "client-metadata";

/// Value of the `Client-Metadata` header, serialized as compact JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientMetadata {
    pub ide_type: &'static str,
    pub platform: &'static str,
    pub plugin_type: &'static str,
}

impl Default for ClientMetadata {
    fn default() -> Self {
        Self {
            ide_type: "IDE_UNSPECIFIED",
            platform: "PLATFORM_UNSPECIFIED",
            plugin_type: "GEMINI",
        }
    }
}

/// Reply of a successful (2xx) upstream call.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    /// Parsed body, `None` when the body is not JSON
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http_client: reqwest::Client,
    url: String,
    timeout_ms: u64,
    client_metadata: String,
}

impl UpstreamClient {
    /// Create a client with its own connection pool.
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_max_idle_per_host(16)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            http_client,
            url: config.url.clone(),
            timeout_ms: config.timeout_ms,
            client_metadata: serde_json::to_string(&ClientMetadata::default())?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Header set sent with every generation call.
    pub fn build_headers(&self, access_token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", access_token)).map_err(|_| {
            AppError::Internal("access token is not a valid header value".to_string())
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(UPSTREAM_USER_AGENT));
        headers.insert(
            HeaderName::from_static(X_GOOG_API_CLIENT),
            HeaderValue::from_static(GOOG_API_CLIENT),
        );
        headers.insert(
            HeaderName::from_static(CLIENT_METADATA),
            HeaderValue::from_str(&self.client_metadata)
                .map_err(|e| AppError::Internal(e.to_string()))?,
        );

        Ok(headers)
    }

    /// POST the envelope and return the reply.
    ///
    /// Non-2xx statuses become [`AppError::Upstream`] carrying the upstream
    /// body; timeouts become [`AppError::Timeout`]; any other failure is
    /// [`AppError::Transport`].
    pub async fn generate_content(
        &self,
        access_token: &str,
        envelope: &UpstreamEnvelope,
    ) -> Result<UpstreamReply> {
        let headers = self.build_headers(access_token)?;

        let response = self
            .http_client
            .post(&self.url)
            .headers(headers)
            .json(envelope)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status().as_u16();
        let success = response.status().is_success();

        tracing::debug!(
            request_id = %get_request_id(),
            url = %self.url,
            status = status,
            method = "POST",
            "Upstream request completed"
        );

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !success {
            return Err(AppError::Upstream {
                status,
                body: parse_error_body(&bytes),
            });
        }

        Ok(UpstreamReply {
            status,
            body: serde_json::from_slice::<Value>(&bytes).ok(),
        })
    }

    fn map_transport_error(&self, e: reqwest::Error) -> AppError {
        tracing::debug!(
            request_id = %get_request_id(),
            url = %self.url,
            error = %e,
            error_source = ?e.source(),
            is_timeout = e.is_timeout(),
            is_connect = e.is_connect(),
            "HTTP request to upstream failed"
        );

        if e.is_timeout() {
            AppError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            AppError::Transport(e)
        }
    }
}

/// Decode an upstream error body for the `details` member.
///
/// JSON bodies are forwarded as JSON, anything else as text; an empty body
/// yields `None`.
pub fn parse_error_body(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return None;
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}
