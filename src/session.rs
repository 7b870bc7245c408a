//! Drives one user's request pipeline: form state, submission lifecycle, and
//! saved-outfit actions. This is the boundary the presentation layer consumes.

use crate::clients::recommendation::RecommendationClient;
use crate::clients::traits::GenerativeBackend;
use crate::error::Result;
use crate::form::OutfitForm;
use crate::models::{OutfitRequest, PrimaryOutfit, StylistResponse};
use crate::store::{KeyValueStore, SavedOutfits};
use crate::validation::Field;

/// Where the session currently is in the request lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Editing,
    Loading,
    Ready(StylistResponse),
    Failed(String),
}

pub struct StylistSession<B: GenerativeBackend, S: KeyValueStore> {
    form: OutfitForm,
    client: RecommendationClient<B>,
    saved: SavedOutfits<S>,
    phase: Phase,
}

impl<B: GenerativeBackend, S: KeyValueStore> StylistSession<B, S> {
    pub fn new(client: RecommendationClient<B>, saved: SavedOutfits<S>) -> Self {
        Self {
            form: OutfitForm::new(),
            client,
            saved,
            phase: Phase::Editing,
        }
    }

    pub fn form(&self) -> &OutfitForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OutfitForm {
        &mut self.form
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Validate and, if the form is submittable, enter the loading phase.
    ///
    /// Returns the request to execute, or `None` when submission is blocked:
    /// a request already in flight (re-submission is disabled rather than
    /// cancelled) or a form that fails validation. An invalid form never
    /// reaches the recommendation client.
    pub fn begin_submit(&mut self) -> Option<OutfitRequest> {
        if matches!(self.phase, Phase::Loading) {
            return None;
        }
        if !self.form.validate_all() {
            return None;
        }
        self.phase = Phase::Loading;
        Some(self.form.to_request())
    }

    /// Resolve the in-flight request. The previous result, if any, is
    /// replaced wholesale.
    pub fn complete(&mut self, result: Result<StylistResponse>) {
        self.phase = match result {
            Ok(response) => Phase::Ready(response),
            Err(err) => Phase::Failed(err.user_message()),
        };
    }

    /// Full submit: gate, call the client, resolve. Suspends until the remote
    /// service responds or fails.
    pub async fn submit(&mut self) -> &Phase {
        if let Some(request) = self.begin_submit() {
            let result = self.client.fetch_recommendation(&request).await;
            self.complete(result);
        }
        &self.phase
    }

    /// "New Search": clear the form and any result or error.
    pub fn reset(&mut self) {
        self.form.reset();
        self.phase = Phase::Editing;
    }

    /// Suggestion-chip click. Counts as a user interaction, so the field is
    /// touched and validated.
    pub fn apply_suggestion(&mut self, text: &str) {
        self.form.set_value(Field::Occasion, text);
        self.form.touch(Field::Occasion);
    }

    /// The displayed primary outfit, if a result is showing.
    pub fn current_outfit(&self) -> Option<&PrimaryOutfit> {
        match &self.phase {
            Phase::Ready(response) => Some(&response.primary_outfit),
            _ => None,
        }
    }

    /// Recomputed from storage on every call, so the answer tracks both
    /// storage truth and whichever outfit is currently displayed.
    pub fn is_current_saved(&self) -> bool {
        self.current_outfit()
            .is_some_and(|outfit| self.saved.is_saved(&outfit.title))
    }

    /// Toggle the displayed outfit in the saved collection. Returns the new
    /// membership state, or `None` when no result is showing.
    pub fn toggle_save_current(&mut self) -> Option<bool> {
        let outfit = self.current_outfit()?.clone();
        Some(self.saved.toggle_save(&outfit))
    }

    pub fn saved_outfits(&self) -> &SavedOutfits<S> {
        &self.saved
    }
}
