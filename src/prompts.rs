//! Prompt text and fixed option lists for the stylist model.

use crate::models::OutfitRequest;

/// Persona and constraints sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are FashionMate, an AI personal stylist. \
Recommend outfits with a sophisticated, encouraging tone. Never include images, \
links, or markdown formatting. Always return exactly one primary outfit and \
exactly 3 additional suggestions, as JSON matching the requested schema.";

/// Style focus choices offered by the form.
pub const GENDER_OPTIONS: [&str; 3] = ["Female", "Male", "Non-Binary"];

/// Quick-suggestion chips shown under the occasion field.
pub const SUGGESTED_OCCASIONS: [&str; 6] = [
    "Casual Coffee Date",
    "Summer Wedding Guest",
    "Tech Job Interview",
    "Weekend Brunch",
    "Gallery Opening",
    "Beach Vacation",
];

/// User prompt for one request. Gender focus and occasion are interpolated
/// verbatim; the preferences line appears only when preferences were given.
pub fn build_user_prompt(request: &OutfitRequest) -> String {
    let mut prompt = format!(
        "User query for outfit recommendation:\n\
         - Occasion / event: \"{}\"\n\
         - Style focus (gender): {}",
        request.occasion, request.gender_focus
    );
    if let Some(preferences) = request.preferences.as_deref()
        && !preferences.is_empty()
    {
        prompt.push_str(&format!("\n- Extra notes / preferences: {preferences}"));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(preferences: Option<&str>) -> OutfitRequest {
        OutfitRequest {
            occasion: "Gallery Opening".to_string(),
            gender_focus: "Non-Binary".to_string(),
            preferences: preferences.map(str::to_string),
        }
    }

    #[test]
    fn prompt_interpolates_occasion_and_focus_verbatim() {
        let prompt = build_user_prompt(&request(None));
        assert!(prompt.contains("\"Gallery Opening\""));
        assert!(prompt.contains("Non-Binary"));
    }

    #[test]
    fn preferences_line_only_when_present() {
        assert!(!build_user_prompt(&request(None)).contains("preferences:"));
        let prompt = build_user_prompt(&request(Some("no heels")));
        assert!(prompt.contains("preferences: no heels"));
    }
}
