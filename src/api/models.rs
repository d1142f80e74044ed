//! API request and response models.
//!
//! This module defines the JSON envelopes exchanged with callers: the
//! generation request and result, the model catalog listing and the service
//! descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Generation request as sent by the caller.
///
/// Every member is optional at the decoding level; required members are
/// checked by the relay service so that a missing field produces the
/// validation envelope instead of a decoding error.
#[derive(Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "model": "gemini-3-pro-high",
    "prompt": "Write a haiku about Rust",
    "projectId": "my-project-123",
    "accessToken": "ya29.a0Af...",
    "systemPrompt": "You are a helpful assistant.",
    "maxTokens": 1000,
    "temperature": 0.7
}))]
pub struct GenerationRequest {
    /// Model identifier (default: gemini-3-pro-high)
    pub model: Option<String>,

    /// User content to send
    pub prompt: Option<String>,

    /// Upstream project identifier
    pub project_id: Option<String>,

    /// Bearer credential forwarded to the backend
    pub access_token: Option<String>,

    /// System instruction
    pub system_prompt: Option<String>,

    /// Maximum output tokens (default: 1000), forwarded as sent
    #[schema(value_type = Option<f64>)]
    pub max_tokens: Option<serde_json::Number>,

    /// Sampling temperature (default: 0.7), forwarded as sent
    #[schema(value_type = Option<f64>)]
    pub temperature: Option<serde_json::Number>,
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("model", &self.model)
            .field("prompt", &self.prompt)
            .field("project_id", &self.project_id)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("system_prompt", &self.system_prompt)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Successful generation result.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "success": true,
    "content": "Ferris scuttles by",
    "model": "gemini-3-pro-high",
    "timestamp": "2026-01-01T00:00:00.000Z"
}))]
pub struct GenerationResponse {
    pub success: bool,

    /// Generated text, or the fallback literal when the reply had none
    pub content: String,

    /// Model echoed from the request
    pub model: String,

    /// Response time, ISO-8601 UTC
    pub timestamp: String,
}

/// Failure envelope; `details` is omitted for validation failures.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "success": false,
    "error": "Request failed with status code 401",
    "details": {"error": {"code": 401, "message": "Request had invalid authentication credentials."}}
}))]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
}

/// Entry of the model catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub provider: String,
}

/// Response of `GET /api/models`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelListResponse {
    pub success: bool,
    pub models: Vec<ModelInfo>,
}

/// Route map advertised by the service descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EndpointMap {
    pub generate: String,
    pub models: String,
}

/// Response of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "status": "ok",
    "service": "Antigravity API",
    "version": "1.0.0",
    "endpoints": {"generate": "POST /api/generate", "models": "GET /api/models"}
}))]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub version: String,
    pub endpoints: EndpointMap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generation_request_camel_case() {
        let request: GenerationRequest = serde_json::from_value(json!({
            "prompt": "hi",
            "projectId": "p1",
            "accessToken": "t1",
            "systemPrompt": "sys",
            "maxTokens": 64,
            "temperature": 0.2
        }))
        .unwrap();

        assert_eq!(request.prompt.as_deref(), Some("hi"));
        assert_eq!(request.project_id.as_deref(), Some("p1"));
        assert_eq!(request.access_token.as_deref(), Some("t1"));
        assert_eq!(request.system_prompt.as_deref(), Some("sys"));
        assert_eq!(request.max_tokens.and_then(|n| n.as_i64()), Some(64));
        assert_eq!(request.temperature.and_then(|n| n.as_f64()), Some(0.2));
        assert!(request.model.is_none());
    }

    #[test]
    fn test_generation_request_empty_object() {
        let request: GenerationRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.prompt.is_none());
        assert!(request.project_id.is_none());
        assert!(request.access_token.is_none());
    }

    #[test]
    fn test_generation_request_accepts_any_json_number() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"maxTokens": 1e3, "temperature": 1}"#,
        )
        .unwrap();
        assert_eq!(request.max_tokens.unwrap().as_f64(), Some(1000.0));
        assert_eq!(request.temperature.unwrap().as_u64(), Some(1));

        let huge: GenerationRequest =
            serde_json::from_str(r#"{"maxTokens": 99999999999999999999}"#).unwrap();
        assert!(huge.max_tokens.unwrap().is_f64());

        let wrong_type = serde_json::from_str::<GenerationRequest>(r#"{"maxTokens": "lots"}"#);
        assert!(wrong_type.is_err());
    }

    #[test]
    fn test_generation_request_null_is_absent() {
        let request: GenerationRequest =
            serde_json::from_value(json!({"model": null, "maxTokens": null})).unwrap();
        assert!(request.model.is_none());
        assert!(request.max_tokens.is_none());
    }

    #[test]
    fn test_generation_request_ignores_unknown_fields() {
        let request: GenerationRequest =
            serde_json::from_value(json!({"prompt": "hi", "stream": true})).unwrap();
        assert_eq!(request.prompt.as_deref(), Some("hi"));
    }

    #[test]
    fn test_debug_redacts_access_token() {
        let request = GenerationRequest {
            access_token: Some("secret-token".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", request);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_error_response_skips_missing_details() {
        let response = ErrorResponse {
            success: false,
            error: "boom".to_string(),
            details: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"success": false, "error": "boom"}));
    }
}
