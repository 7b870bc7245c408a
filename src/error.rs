//! Domain-specific error types for fashion-mate

use thiserror::Error;

/// Fixed sentence shown to the user when a recommendation request fails.
/// Underlying causes are logged for diagnostics, never surfaced.
pub const USER_FACING_FAILURE: &str =
    "Unable to generate outfit recommendations at this time. Please try again.";

/// Main error type for the recommendation pipeline
#[derive(Error, Debug)]
pub enum StylistError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("model returned no text payload")]
    EmptyResponse,

    #[error("model payload did not match the expected shape: {message}")]
    MalformedResponse { message: String },

    #[error("recommendation service unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl StylistError {
    /// Message the presentation layer may show for this failure.
    ///
    /// Validation errors carry their own inline copy; everything else is
    /// collapsed into the single normalized sentence.
    pub fn user_message(&self) -> String {
        match self {
            StylistError::Validation { message } => message.clone(),
            _ => USER_FACING_FAILURE.to_string(),
        }
    }
}

impl From<serde_json::Error> for StylistError {
    fn from(err: serde_json::Error) -> Self {
        StylistError::MalformedResponse {
            message: err.to_string(),
        }
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, StylistError>;
