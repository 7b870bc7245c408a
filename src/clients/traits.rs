use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Internal failure taxonomy for a generative backend. Normalized by the
/// recommendation client before crossing a component boundary.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("http error: {0}")]
    Http(String),
    #[error("service returned status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("no text payload in response")]
    EmptyResponse,
}

/// Black-box contract with the generative service: given an instruction, a
/// prompt, and a response schema, return the raw text payload or fail.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
        response_schema: Value,
    ) -> Result<String, BackendError>;
}
