//! Structured-output schema sent with every generation request.

use serde_json::{Value, json};

/// Response schema mirroring [`crate::models::StylistResponse`].
///
/// This constrains the model to emit matching JSON syntactically. It cannot
/// express the exactly-3 suggestion count, which is checked after parse.
pub fn stylist_response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "primary_outfit": {
                "type": "object",
                "properties": {
                    "title": {"type": "string"},
                    "top": {"type": "string"},
                    "bottom": {"type": "string"},
                    "footwear": {"type": "string"},
                    "accessories": {"type": "array", "items": {"type": "string"}},
                    "reasoning": {"type": "string"}
                },
                "required": ["title", "top", "bottom", "footwear", "accessories", "reasoning"]
            },
            "additional_suggestions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": {"type": "string"},
                        "outfit_summary": {"type": "string"}
                    },
                    "required": ["label", "outfit_summary"]
                }
            },
            "styling_notes": {"type": "string"}
        },
        "required": ["primary_outfit", "additional_suggestions", "styling_notes"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_all_top_level_fields() {
        let schema = stylist_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(
            required,
            vec!["primary_outfit", "additional_suggestions", "styling_notes"]
        );
    }

    #[test]
    fn schema_requires_all_primary_outfit_fields() {
        let schema = stylist_response_schema();
        let required = schema["properties"]["primary_outfit"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 6);
    }
}
