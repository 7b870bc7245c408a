//! Data model for the recommendation pipeline.
//!
//! Field names match the JSON contract with the generative service
//! (snake_case throughout). `title` string equality is the sole identity
//! mechanism for saved outfits; no entity carries a generated identifier.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StylistError};

/// Number of alternate suggestions the service contract requires.
pub const EXPECTED_SUGGESTIONS: usize = 3;

/// One validated submission, built fresh per request and discarded after the
/// client call resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitRequest {
    pub occasion: String,
    pub gender_focus: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
}

/// The single best recommendation returned per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryOutfit {
    pub title: String,
    pub top: String,
    pub bottom: String,
    pub footwear: String,
    pub accessories: Vec<String>,
    pub reasoning: String,
}

/// One of exactly three alternate outfit summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalSuggestion {
    pub label: String,
    pub outfit_summary: String,
}

/// Full result of one recommendation request. Replaced wholesale on the next
/// submission or reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylistResponse {
    pub primary_outfit: PrimaryOutfit,
    pub additional_suggestions: Vec<AdditionalSuggestion>,
    pub styling_notes: String,
}

impl StylistResponse {
    /// Parse and shape-check a raw text payload from the model.
    ///
    /// The response schema constrains the model syntactically, but it does
    /// not guarantee the suggestion count or non-empty strings, and some
    /// models still wrap the document in prose or a code fence. Anything that
    /// does not deserialize into the exact shape becomes a
    /// [`StylistError::MalformedResponse`], never a raw parser error.
    pub fn from_payload(text: &str) -> Result<Self> {
        let parsed: StylistResponse = match serde_json::from_str(text) {
            Ok(parsed) => parsed,
            Err(first_err) => {
                let Some(slice) = extract_json_object(text) else {
                    return Err(StylistError::MalformedResponse {
                        message: first_err.to_string(),
                    });
                };
                serde_json::from_str(slice).map_err(|err| StylistError::MalformedResponse {
                    message: err.to_string(),
                })?
            }
        };
        parsed.check_shape()?;
        Ok(parsed)
    }

    fn check_shape(&self) -> Result<()> {
        let primary = &self.primary_outfit;
        let mandatory = [
            ("primary_outfit.title", &primary.title),
            ("primary_outfit.top", &primary.top),
            ("primary_outfit.bottom", &primary.bottom),
            ("primary_outfit.footwear", &primary.footwear),
            ("primary_outfit.reasoning", &primary.reasoning),
            ("styling_notes", &self.styling_notes),
        ];
        for (name, value) in mandatory {
            if value.trim().is_empty() {
                return Err(StylistError::MalformedResponse {
                    message: format!("{name} is empty"),
                });
            }
        }
        if primary.accessories.is_empty() {
            return Err(StylistError::MalformedResponse {
                message: "primary_outfit.accessories is empty".to_string(),
            });
        }
        if self.additional_suggestions.len() != EXPECTED_SUGGESTIONS {
            return Err(StylistError::MalformedResponse {
                message: format!(
                    "expected {EXPECTED_SUGGESTIONS} additional suggestions, got {}",
                    self.additional_suggestions.len()
                ),
            });
        }
        Ok(())
    }
}

/// Best-effort recovery when the model wraps the JSON document in extra text.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
