//! Pure field validation for the outfit request form.
//!
//! Every rule produces the exact message the form renders; an empty string
//! means the field is valid. Rules short-circuit, so the first failing check
//! decides the message.

use std::fmt;

pub const OCCASION_MIN_LENGTH: usize = 5;
pub const OCCASION_MAX_LENGTH: usize = 300;
pub const PREFERENCES_MAX_LENGTH: usize = 200;

/// Form fields understood by the validation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Occasion,
    GenderFocus,
    Preferences,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Occasion => "occasion",
            Field::GenderFocus => "style focus",
            Field::Preferences => "preferences",
        };
        f.write_str(name)
    }
}

/// Validate one field value. Returns the inline error message, or an empty
/// string when the value is acceptable.
pub fn validate(field: Field, value: &str) -> String {
    match field {
        Field::Occasion => validate_occasion(value),
        Field::GenderFocus => validate_gender_focus(value),
        Field::Preferences => validate_preferences(value),
    }
}

fn validate_occasion(occasion: &str) -> String {
    let trimmed = occasion.trim();
    if trimmed.is_empty() {
        return "Please describe the occasion.".to_string();
    }
    if trimmed.chars().count() < OCCASION_MIN_LENGTH {
        return format!("Add at least {OCCASION_MIN_LENGTH} characters.");
    }
    // Length cap applies to the raw value, not the trimmed one.
    if occasion.chars().count() > OCCASION_MAX_LENGTH {
        return format!("Limit to {OCCASION_MAX_LENGTH} characters.");
    }
    if !trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
        return "Please include descriptive text.".to_string();
    }
    String::new()
}

fn validate_gender_focus(gender_focus: &str) -> String {
    if gender_focus.trim().is_empty() {
        return "Please select a style focus.".to_string();
    }
    String::new()
}

fn validate_preferences(preferences: &str) -> String {
    if preferences.chars().count() > PREFERENCES_MAX_LENGTH {
        return format!("Limit to {PREFERENCES_MAX_LENGTH} characters.");
    }
    if !preferences.is_empty() && !preferences.chars().any(|c| c.is_ascii_alphanumeric()) {
        return "Please include valid text.".to_string();
    }
    String::new()
}
