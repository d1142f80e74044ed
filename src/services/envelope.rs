//! Upstream request envelope and response shape navigation.
//!
//! The Cloud Code `generateContent` method wraps a Gemini-style request in a
//! project/model envelope. Replies nest the generated text under
//! `response.candidates[0].content.parts[0].text`.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// `userAgent` member sent in every envelope.
pub const ENVELOPE_USER_AGENT: &str = "antigravity-custom-api";

/// Role of the single content entry.
pub const ROLE_USER: &str = "user";

/// Content returned when the upstream reply lacks generated text.
pub const FALLBACK_CONTENT: &str = "Error en respuesta";

/// Top-level body POSTed to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamEnvelope {
    pub project: String,
    pub model: String,
    pub request: UpstreamRequest,
    pub user_agent: String,
    pub request_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamRequest {
    pub contents: Vec<Content>,
    pub system_instruction: SystemInstruction,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: Number,
    pub temperature: Number,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Fully resolved inputs of one generation call, defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeParams<'a> {
    pub project_id: &'a str,
    pub model: &'a str,
    pub prompt: &'a str,
    pub system_prompt: &'a str,
    pub max_tokens: &'a Number,
    pub temperature: &'a Number,
}

impl UpstreamEnvelope {
    /// Build the envelope for a single-turn user prompt.
    pub fn build(params: &EnvelopeParams<'_>, request_id: impl Into<String>) -> Self {
        Self {
            project: params.project_id.to_string(),
            model: params.model.to_string(),
            request: UpstreamRequest {
                contents: vec![Content {
                    role: ROLE_USER.to_string(),
                    parts: vec![Part::text(params.prompt)],
                }],
                system_instruction: SystemInstruction {
                    parts: vec![Part::text(params.system_prompt)],
                },
                generation_config: GenerationConfig {
                    max_output_tokens: params.max_tokens.clone(),
                    temperature: params.temperature.clone(),
                },
            },
            user_agent: ENVELOPE_USER_AGENT.to_string(),
            request_id: request_id.into(),
        }
    }
}

/// Navigate `response.candidates[0].content.parts[0].text`.
///
/// Returns `None` when any segment is missing, the leaf is not a string, or
/// the text is empty.
pub fn extract_generated_text(body: &Value) -> Option<&str> {
    body.get("response")?
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn number(raw: &str) -> Number {
        serde_json::from_str(raw).unwrap()
    }

    fn params<'a>(max_tokens: &'a Number, temperature: &'a Number) -> EnvelopeParams<'a> {
        EnvelopeParams {
            project_id: "p1",
            model: "gemini-3-pro-high",
            prompt: "hi",
            system_prompt: "be brief",
            max_tokens,
            temperature,
        }
    }

    #[test]
    fn test_envelope_wire_shape() {
        let (max_tokens, temperature) = (number("1000"), number("0.7"));
        let envelope = UpstreamEnvelope::build(&params(&max_tokens, &temperature), "req-1-abc");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({
                "project": "p1",
                "model": "gemini-3-pro-high",
                "request": {
                    "contents": [{"role": "user", "parts": [{"text": "hi"}]}],
                    "systemInstruction": {"parts": [{"text": "be brief"}]},
                    "generationConfig": {"maxOutputTokens": 1000, "temperature": 0.7}
                },
                "userAgent": "antigravity-custom-api",
                "requestId": "req-1-abc"
            })
        );
    }

    #[test]
    fn test_envelope_passes_values_verbatim() {
        let (max_tokens, temperature) = (number("-5"), number("42.5"));
        let mut p = params(&max_tokens, &temperature);
        p.prompt = "  spaced\nprompt  ";

        let envelope = UpstreamEnvelope::build(&p, "id");
        assert_eq!(envelope.request.contents[0].parts[0].text, "  spaced\nprompt  ");
        assert_eq!(envelope.request.generation_config.max_output_tokens, max_tokens);
        assert_eq!(envelope.request.generation_config.temperature, temperature);
    }

    #[test]
    fn test_envelope_keeps_number_representation() {
        let (max_tokens, temperature) = (number("1000.0"), number("1"));
        let envelope = UpstreamEnvelope::build(&params(&max_tokens, &temperature), "id");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value["request"]["generationConfig"],
            json!({"maxOutputTokens": 1000.0, "temperature": 1})
        );
        assert!(value["request"]["generationConfig"]["maxOutputTokens"].is_f64());
        assert!(value["request"]["generationConfig"]["temperature"].is_u64());
    }

    #[test]
    fn test_extract_generated_text() {
        let body = json!({
            "response": {"candidates": [{"content": {"parts": [{"text": "hello"}]}}]}
        });
        assert_eq!(extract_generated_text(&body), Some("hello"));
    }

    #[test]
    fn test_extract_uses_first_candidate_and_part() {
        let body = json!({
            "response": {"candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other"}]}}
            ]}
        });
        assert_eq!(extract_generated_text(&body), Some("first"));
    }

    #[test]
    fn test_extract_missing_segments() {
        let cases = [
            json!({}),
            json!({"response": {}}),
            json!({"response": {"candidates": []}}),
            json!({"response": {"candidates": [{}]}}),
            json!({"response": {"candidates": [{"content": {"parts": []}}]}}),
            json!({"response": {"candidates": [{"content": {"parts": [{"thought": true}]}}]}}),
            json!({"response": {"candidates": [{"content": {"parts": [{"text": 7}]}}]}}),
            json!({"response": {"candidates": [{"content": {"parts": [{"text": ""}]}}]}}),
            json!("plain string"),
            json!(null),
        ];

        for body in &cases {
            assert_eq!(extract_generated_text(body), None, "body: {}", body);
        }
    }
}
