//! Pipeline stage that turns a validated request into a parsed response.

use crate::clients::traits::{BackendError, GenerativeBackend};
use crate::error::{Result, StylistError};
use crate::models::{OutfitRequest, StylistResponse};
use crate::prompts;
use crate::schemas::stylist_response_schema;

pub struct RecommendationClient<B: GenerativeBackend> {
    backend: B,
}

impl<B: GenerativeBackend> RecommendationClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// One attempt per submission; retry is the caller's manual action.
    ///
    /// Backend failures are logged with their cause and normalized: a missing
    /// text payload becomes [`StylistError::EmptyResponse`], everything else
    /// becomes [`StylistError::ServiceUnavailable`]. A payload that does not
    /// match the contract becomes [`StylistError::MalformedResponse`].
    pub async fn fetch_recommendation(&self, request: &OutfitRequest) -> Result<StylistResponse> {
        let prompt = prompts::build_user_prompt(request);
        let payload = self
            .backend
            .generate(prompts::SYSTEM_INSTRUCTION, &prompt, stylist_response_schema())
            .await
            .map_err(|err| match err {
                BackendError::EmptyResponse => {
                    tracing::warn!("model returned no text payload");
                    StylistError::EmptyResponse
                }
                other => {
                    tracing::warn!(error = %other, "recommendation request failed");
                    StylistError::ServiceUnavailable {
                        message: other.to_string(),
                    }
                }
            })?;

        StylistResponse::from_payload(&payload).inspect_err(|err| {
            tracing::warn!(error = %err, "model payload failed shape validation");
        })
    }
}
