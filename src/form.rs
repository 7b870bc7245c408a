//! Form state with touched/blur semantics.
//!
//! Fields are not validated before the user first interacts with them. Once a
//! field is touched, every value change re-runs its validation. A submit
//! attempt validates everything unconditionally and marks all fields touched.

use std::collections::HashMap;

use crate::models::OutfitRequest;
use crate::validation::{Field, validate};

const FIELDS: [Field; 3] = [Field::Occasion, Field::GenderFocus, Field::Preferences];

#[derive(Debug, Default)]
pub struct OutfitForm {
    occasion: String,
    gender_focus: String,
    preferences: String,
    touched: HashMap<Field, bool>,
    errors: HashMap<Field, String>,
}

impl OutfitForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Occasion => &self.occasion,
            Field::GenderFocus => &self.gender_focus,
            Field::Preferences => &self.preferences,
        }
    }

    /// Store a new value. Touched fields re-validate immediately; untouched
    /// fields stay silent until first blur.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Occasion => self.occasion = value,
            Field::GenderFocus => self.gender_focus = value,
            Field::Preferences => self.preferences = value,
        }
        if self.is_touched(field) {
            self.run_validation(field);
        }
    }

    /// Blur handler: marks the field touched and validates it.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field, true);
        self.run_validation(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.get(&field).copied().unwrap_or(false)
    }

    /// Inline message for one field; empty when valid or not yet validated.
    pub fn error(&self, field: Field) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Validate all fields unconditionally, marking each touched. Returns
    /// whether the form may be submitted.
    pub fn validate_all(&mut self) -> bool {
        for field in FIELDS {
            self.touched.insert(field, true);
            self.run_validation(field);
        }
        self.is_submittable()
    }

    /// All messages empty and both required fields non-empty after trim.
    pub fn is_submittable(&self) -> bool {
        FIELDS.iter().all(|field| self.error(*field).is_empty())
            && !self.occasion.trim().is_empty()
            && !self.gender_focus.trim().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the immutable request for the current values.
    pub fn to_request(&self) -> OutfitRequest {
        let preferences = self.preferences.trim();
        OutfitRequest {
            occasion: self.occasion.trim().to_string(),
            gender_focus: self.gender_focus.trim().to_string(),
            preferences: (!preferences.is_empty()).then(|| preferences.to_string()),
        }
    }

    fn run_validation(&mut self, field: Field) {
        let message = validate(field, self.value(field));
        self.errors.insert(field, message);
    }
}
