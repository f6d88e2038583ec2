//! Boundary adapters for the external generate-content endpoint.
//!
//! Each operation is one stateless request/response round trip: build a
//! Spanish-language instruction (optionally with an inline binary payload),
//! POST it, extract the candidate text and, for structured operations,
//! deserialize it into typed results. Shape mismatches surface as
//! `AppError::MalformedResponse`; the CLI layer decides what the user sees.
//! No retries, no streaming.

pub mod analyze;
pub mod assistant;
pub mod inventory;
pub mod schedule;
pub mod voice;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::env;
use std::time::Duration;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub struct GenerateClient {
    http: reqwest::blocking::Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GenerateClient {
    /// A missing credential short-circuits here, before any network call.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(AppError::MissingApiKey)?;

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            api_key,
        })
    }

    /// One request, one response. Returns the concatenated candidate text.
    pub fn generate(&self, request: GenerateRequest) -> AppResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        );

        let res = self.http.post(&url).json(&request.into_body()).send()?;
        let envelope: Value = res.error_for_status()?.json()?;
        extract_text(&envelope)
    }
}

/// Builder for one generate-content call.
pub struct GenerateRequest {
    parts: Vec<Value>,
    system_instruction: Option<String>,
    json_response: bool,
    response_schema: Option<Value>,
}

impl GenerateRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            parts: vec![json!({ "text": prompt.into() })],
            system_instruction: None,
            json_response: false,
            response_schema: None,
        }
    }

    /// Inline binary payload (base64, no data-URI header), placed before the
    /// instruction text as the endpoint expects.
    pub fn with_inline_data(mut self, mime_type: &str, base64: &str) -> Self {
        self.parts.insert(
            0,
            json!({ "inline_data": { "mime_type": mime_type, "data": base64 } }),
        );
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn expect_json(mut self) -> Self {
        self.json_response = true;
        self
    }

    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.json_response = true;
        self.response_schema = Some(schema);
        self
    }

    fn into_body(self) -> Value {
        let mut body = json!({ "contents": [{ "parts": self.parts }] });

        if let Some(instruction) = self.system_instruction {
            body["system_instruction"] = json!({ "parts": [{ "text": instruction }] });
        }

        if self.json_response {
            let mut config = json!({ "response_mime_type": "application/json" });
            if let Some(schema) = self.response_schema {
                config["response_schema"] = schema;
            }
            body["generationConfig"] = config;
        }

        body
    }
}

/// Pull the text out of `candidates[0].content.parts[].text`.
fn extract_text(envelope: &Value) -> AppResult<String> {
    let parts = envelope
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|cand| cand.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| AppError::MalformedResponse("missing candidates".into()))?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(AppError::MalformedResponse("empty candidate text".into()));
    }
    Ok(text)
}

/// Strict deserialization of a structured payload returned as text.
pub fn parse_json_payload<T: DeserializeOwned>(text: &str) -> AppResult<T> {
    serde_json::from_str(text.trim())
        .map_err(|e| AppError::MalformedResponse(format!("unexpected payload shape: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_candidate_text() {
        let envelope = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "Hola " }, { "text": "mundo" } ] } }
            ]
        });
        assert_eq!(extract_text(&envelope).unwrap(), "Hola mundo");
    }

    #[test]
    fn missing_candidates_is_malformed() {
        let err = extract_text(&json!({ "promptFeedback": {} })).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn inline_data_precedes_text() {
        let body = GenerateRequest::text("instrucción")
            .with_inline_data("audio/webm", "QUJD")
            .into_body();
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert!(parts[0].get("inline_data").is_some());
        assert_eq!(parts[1]["text"], "instrucción");
    }

    #[test]
    fn json_mode_sets_generation_config() {
        let body = GenerateRequest::text("x")
            .with_response_schema(json!({ "type": "OBJECT" }))
            .into_body();
        assert_eq!(
            body["generationConfig"]["response_mime_type"],
            "application/json"
        );
        assert!(body["generationConfig"]["response_schema"].is_object());
    }
}
