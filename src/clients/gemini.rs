//! Gemini REST backend for schema-constrained generation.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::traits::{BackendError, GenerativeBackend};
use crate::config::GeminiConfig;
use crate::error::{Result, StylistError};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    timeout_ms: u64,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| StylistError::Config {
                message: "GEMINI_API_KEY is not set".to_string(),
            })?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|err| StylistError::Config {
                message: format!("failed to build HTTP client: {err}"),
            })?;
        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            timeout_ms: config.timeout_ms,
        })
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
        response_schema: Value,
    ) -> std::result::Result<String, BackendError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: Some(Content {
                role: "system".to_string(),
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            }),
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        };

        let url = format!(
            "{BASE_URL}/{model}:generateContent?key={api_key}",
            model = self.model,
            api_key = self.api_key
        );

        let response = self.http.post(url).json(&body).send().await.map_err(|err| {
            if err.is_timeout() {
                BackendError::Timeout {
                    timeout_ms: self.timeout_ms,
                }
            } else {
                BackendError::Http(err.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            tracing::warn!(status = status.as_u16(), "Gemini returned an error status");
            return Err(BackendError::Status {
                code: status.as_u16(),
                body: body_text,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| BackendError::Http(format!("failed to decode response envelope: {err}")))?;

        extract_text(parsed).ok_or(BackendError::EmptyResponse)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_text_returns_first_text_part() {
        let envelope = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"ok\":true}"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(envelope).unwrap();
        assert_eq!(extract_text(parsed).as_deref(), Some("{\"ok\":true}"));
    }

    #[test]
    fn extract_text_handles_empty_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_text(parsed).is_none());

        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();
        assert!(extract_text(parsed).is_none());
    }
}
