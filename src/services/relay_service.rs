//! Relay service: request defaulting, validation and the upstream round trip.
//!
//! A generation request is resolved into concrete values, wrapped in the
//! upstream envelope, sent once, and the generated text is pulled out of the
//! reply. Nothing is retained between calls.

use crate::api::catalog::is_catalog_model;
use crate::api::models::{GenerationRequest, GenerationResponse};
use crate::core::error_types::MISSING_FIELDS_MESSAGE;
use crate::core::logging::{generate_request_id, REQUEST_ID};
use crate::core::metrics::record_upstream_outcome;
use crate::core::{AppError, Result};
use crate::services::envelope::{
    extract_generated_text, EnvelopeParams, UpstreamEnvelope, FALLBACK_CONTENT,
};
use crate::services::upstream::UpstreamClient;
use chrono::{SecondsFormat, Utc};
use serde_json::Number;
use std::time::Instant;

pub const DEFAULT_MODEL: &str = "gemini-3-pro-high";
pub const DEFAULT_SYSTEM_PROMPT: &str = "Eres un asistente útil para desarrollo de aplicaciones.";
pub const DEFAULT_MAX_TOKENS: i64 = 1000;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

const OUTCOME_SUCCESS: &str = "success";
const OUTCOME_FALLBACK: &str = "fallback";

/// Metrics label for models outside the catalog.
pub const OTHER_MODEL_LABEL: &str = "other";

/// A generation request with required fields present and defaults applied.
#[derive(Clone, PartialEq)]
pub struct ResolvedRequest {
    pub model: String,
    pub prompt: String,
    pub project_id: String,
    pub access_token: String,
    pub system_prompt: String,
    pub max_tokens: Number,
    pub temperature: Number,
}

impl std::fmt::Debug for ResolvedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedRequest")
            .field("model", &self.model)
            .field("prompt", &self.prompt)
            .field("project_id", &self.project_id)
            .field("access_token", &"[REDACTED]")
            .field("system_prompt", &self.system_prompt)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl ResolvedRequest {
    /// Check required fields and fill in defaults.
    ///
    /// `prompt`, `projectId` and `accessToken` must be present and non-empty.
    /// Numeric values are passed through without bounds checks.
    pub fn resolve(request: GenerationRequest) -> Result<Self> {
        let (Some(prompt), Some(project_id), Some(access_token)) = (
            non_empty(request.prompt),
            non_empty(request.project_id),
            non_empty(request.access_token),
        ) else {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        };

        Ok(Self {
            model: request.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            prompt,
            project_id,
            access_token,
            system_prompt: request
                .system_prompt
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            max_tokens: request
                .max_tokens
                .unwrap_or_else(|| Number::from(DEFAULT_MAX_TOKENS)),
            temperature: request.temperature.unwrap_or_else(default_temperature),
        })
    }

    /// Build the upstream envelope for this request.
    pub fn to_envelope(&self, request_id: impl Into<String>) -> UpstreamEnvelope {
        UpstreamEnvelope::build(
            &EnvelopeParams {
                project_id: &self.project_id,
                model: &self.model,
                prompt: &self.prompt,
                system_prompt: &self.system_prompt,
                max_tokens: &self.max_tokens,
                temperature: &self.temperature,
            },
            request_id,
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn default_temperature() -> Number {
    Number::from_f64(DEFAULT_TEMPERATURE).expect("default temperature is finite")
}

/// Label used for per-model upstream metrics.
///
/// Caller-chosen model names outside the catalog share one series.
pub fn model_label(model: &str) -> &str {
    if is_catalog_model(model) {
        model
    } else {
        OTHER_MODEL_LABEL
    }
}

/// Current time as ISO-8601 UTC with millisecond precision.
pub fn response_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Forwards generation requests to the backend.
#[derive(Debug, Clone)]
pub struct RelayService {
    upstream: UpstreamClient,
}

impl RelayService {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// Handle one generation request end to end.
    ///
    /// Validation failures return before any outbound call. A 2xx reply
    /// without generated text yields [`FALLBACK_CONTENT`] rather than an
    /// error.
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let resolved = ResolvedRequest::resolve(request)?;
        let request_id = generate_request_id();

        REQUEST_ID
            .scope(request_id.clone(), async move {
                let envelope = resolved.to_envelope(request_id.clone());
                let label = model_label(&resolved.model);

                tracing::debug!(
                    request_id = %request_id,
                    model = %resolved.model,
                    project = %resolved.project_id,
                    max_tokens = %resolved.max_tokens,
                    temperature = %resolved.temperature,
                    "Forwarding generation request"
                );

                let start = Instant::now();
                let result = self
                    .upstream
                    .generate_content(&resolved.access_token, &envelope)
                    .await;
                let latency = start.elapsed().as_secs_f64();

                let reply = match result {
                    Ok(reply) => reply,
                    Err(e) => {
                        let category = e.category();
                        tracing::error!(
                            request_id = %request_id,
                            model = %resolved.model,
                            category = %category,
                            status = e.status_code().as_u16(),
                            "Error calling Antigravity API: {}",
                            e
                        );
                        record_upstream_outcome(label, category.as_str(), latency);
                        return Err(e);
                    }
                };

                let content = match reply.body.as_ref().and_then(extract_generated_text) {
                    Some(text) => {
                        record_upstream_outcome(label, OUTCOME_SUCCESS, latency);
                        text.to_string()
                    }
                    None => {
                        tracing::warn!(
                            request_id = %request_id,
                            model = %resolved.model,
                            status = reply.status,
                            "Upstream reply has no generated text, using fallback content"
                        );
                        record_upstream_outcome(label, OUTCOME_FALLBACK, latency);
                        FALLBACK_CONTENT.to_string()
                    }
                };

                Ok(GenerationResponse {
                    success: true,
                    content,
                    model: resolved.model,
                    timestamp: response_timestamp(),
                })
            })
            .await
    }
}
