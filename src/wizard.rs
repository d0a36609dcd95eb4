//! Wizard selection state
//!
//! Holds the three onboarding selections and the derived progress value.
//! Age and voice are single-select (re-selecting replaces, never clears);
//! story styles are a multi-select toggled in and out by id. Selections are
//! never persisted; state lives only for the duration of the wizard.

use crate::models::PreferenceKind;

/// Progress contribution of each completed step, in percent
const STEP_WEIGHT: f64 = 33.33;

/// Selection state for the preference wizard
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    /// Selected age range id, or empty when unset
    pub selected_age: String,

    /// Selected story style ids (membership only, order not meaningful)
    pub selected_styles: Vec<String>,

    /// Selected voice id, or empty when unset
    pub selected_voice: String,

    /// Whether a submit is in flight
    pub is_submitting: bool,
}

impl WizardState {
    /// Create a fresh wizard with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the age range selection, replacing any previous one
    pub fn set_age(&mut self, id: &str) {
        self.selected_age = id.to_string();
    }

    /// Set the voice selection, replacing any previous one
    pub fn set_voice(&mut self, id: &str) {
        self.selected_voice = id.to_string();
    }

    /// Toggle a story style in or out of the selection
    pub fn toggle_style(&mut self, id: &str) {
        if self.selected_styles.iter().any(|s| s == id) {
            self.selected_styles.retain(|s| s != id);
        } else {
            self.selected_styles.push(id.to_string());
        }
    }

    /// Apply a selection for the given category
    pub fn select(&mut self, kind: PreferenceKind, id: &str) {
        match kind {
            PreferenceKind::Age => self.set_age(id),
            PreferenceKind::Story => self.toggle_style(id),
            PreferenceKind::Voice => self.set_voice(id),
        }
    }

    /// Whether the given option id is currently selected in its category
    pub fn is_selected(&self, kind: PreferenceKind, id: &str) -> bool {
        match kind {
            PreferenceKind::Age => self.selected_age == id,
            PreferenceKind::Story => self.selected_styles.iter().any(|s| s == id),
            PreferenceKind::Voice => self.selected_voice == id,
        }
    }

    /// Completion percentage across the three steps
    ///
    /// Each completed step adds 33.33, capped at 100. All three steps
    /// together read 99.99, not 100; the progress bar rounds for display.
    pub fn progress(&self) -> f64 {
        let mut total = 0.0;
        if !self.selected_age.is_empty() {
            total += STEP_WEIGHT;
        }
        if !self.selected_styles.is_empty() {
            total += STEP_WEIGHT;
        }
        if !self.selected_voice.is_empty() {
            total += STEP_WEIGHT;
        }
        total.min(100.0)
    }

    /// Whether the Next button is enabled
    ///
    /// Requires all three steps complete and no submit already in flight.
    pub fn can_submit(&self) -> bool {
        !self.selected_age.is_empty()
            && !self.selected_styles.is_empty()
            && !self.selected_voice.is_empty()
            && !self.is_submitting
    }

    /// Start a submit if the gating condition holds
    ///
    /// Returns false without side effects when the wizard is incomplete or
    /// a submit is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.is_submitting = true;
        true
    }

    /// Cancel an in-flight submit, re-enabling the Next button
    pub fn cancel_submit(&mut self) {
        self.is_submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_new_wizard_is_empty() {
        let wizard = WizardState::new();
        assert!(wizard.selected_age.is_empty());
        assert!(wizard.selected_styles.is_empty());
        assert!(wizard.selected_voice.is_empty());
        assert!(!wizard.is_submitting);
        assert!(wizard.progress().abs() < EPSILON);
    }

    #[test]
    fn test_set_age_replaces() {
        let mut wizard = WizardState::new();
        wizard.set_age("3-5");
        wizard.set_age("6-8");
        assert_eq!(wizard.selected_age, "6-8");
    }

    #[test]
    fn test_set_age_same_id_is_noop() {
        let mut wizard = WizardState::new();
        wizard.set_age("3-5");
        wizard.set_age("3-5");
        assert_eq!(wizard.selected_age, "3-5");
    }

    #[test]
    fn test_set_voice_replaces() {
        let mut wizard = WizardState::new();
        wizard.set_voice("custom");
        wizard.set_voice("default");
        assert_eq!(wizard.selected_voice, "default");
    }

    #[test]
    fn test_toggle_style_adds_and_removes() {
        let mut wizard = WizardState::new();
        wizard.toggle_style("warm");
        assert!(wizard.is_selected(PreferenceKind::Story, "warm"));

        wizard.toggle_style("warm");
        assert!(!wizard.is_selected(PreferenceKind::Story, "warm"));
        assert!(wizard.selected_styles.is_empty());
    }

    #[test]
    fn test_toggle_style_no_duplicates() {
        let mut wizard = WizardState::new();
        wizard.toggle_style("warm");
        wizard.toggle_style("humor");
        wizard.toggle_style("warm");
        wizard.toggle_style("warm");
        assert_eq!(
            wizard.selected_styles.iter().filter(|s| *s == "warm").count(),
            1
        );
        assert!(wizard.is_selected(PreferenceKind::Story, "humor"));
    }

    #[test]
    fn test_toggle_sequence_is_symmetric_difference() {
        let mut wizard = WizardState::new();
        for id in ["warm", "humor", "scifi", "humor", "adventure", "scifi", "scifi"] {
            wizard.toggle_style(id);
        }
        // warm: 1x, humor: 2x, scifi: 3x, adventure: 1x
        assert!(wizard.is_selected(PreferenceKind::Story, "warm"));
        assert!(!wizard.is_selected(PreferenceKind::Story, "humor"));
        assert!(wizard.is_selected(PreferenceKind::Story, "scifi"));
        assert!(wizard.is_selected(PreferenceKind::Story, "adventure"));
    }

    #[test]
    fn test_progress_scenario() {
        let mut wizard = WizardState::new();
        assert!(wizard.progress().abs() < EPSILON);

        wizard.set_age("6-8");
        assert!((wizard.progress() - 33.33).abs() < EPSILON);

        wizard.toggle_style("humor");
        assert!((wizard.progress() - 66.66).abs() < EPSILON);

        wizard.set_voice("custom");
        assert!((wizard.progress() - 99.99).abs() < EPSILON);
        assert!(wizard.progress() <= 100.0);
        assert!(wizard.can_submit());
    }

    #[test]
    fn test_progress_monotone_and_bounded() {
        let mut wizard = WizardState::new();
        let p0 = wizard.progress();
        wizard.set_voice("default");
        let p1 = wizard.progress();
        wizard.set_age("9-12");
        let p2 = wizard.progress();
        wizard.toggle_style("adventure");
        let p3 = wizard.progress();

        assert!(p0 <= p1 && p1 <= p2 && p2 <= p3);
        assert!(p3 <= 100.0);
    }

    #[test]
    fn test_submit_gating_conjunction() {
        let mut wizard = WizardState::new();
        assert!(!wizard.can_submit());

        wizard.set_age("3-5");
        wizard.set_voice("default");
        assert!(!wizard.can_submit(), "missing style should disable submit");

        wizard.toggle_style("warm");
        assert!(wizard.can_submit());
    }

    #[test]
    fn test_begin_submit_requires_complete_wizard() {
        let mut wizard = WizardState::new();
        assert!(!wizard.begin_submit());
        assert!(!wizard.is_submitting);

        wizard.set_age("3-5");
        wizard.toggle_style("warm");
        wizard.set_voice("default");
        assert!(wizard.begin_submit());
        assert!(wizard.is_submitting);

        // Already in flight: gated off
        assert!(!wizard.can_submit());
        assert!(!wizard.begin_submit());
    }

    #[test]
    fn test_cancel_submit_reenables() {
        let mut wizard = WizardState::new();
        wizard.set_age("3-5");
        wizard.toggle_style("warm");
        wizard.set_voice("default");
        assert!(wizard.begin_submit());

        wizard.cancel_submit();
        assert!(!wizard.is_submitting);
        assert!(wizard.can_submit());
    }

    #[test]
    fn test_select_dispatches_by_kind() {
        let mut wizard = WizardState::new();
        wizard.select(PreferenceKind::Age, "9-12");
        wizard.select(PreferenceKind::Story, "scifi");
        wizard.select(PreferenceKind::Voice, "custom");

        assert_eq!(wizard.selected_age, "9-12");
        assert_eq!(wizard.selected_voice, "custom");
        assert!(wizard.is_selected(PreferenceKind::Story, "scifi"));

        // Single-select categories replace; multi-select toggles
        wizard.select(PreferenceKind::Age, "9-12");
        assert_eq!(wizard.selected_age, "9-12");
        wizard.select(PreferenceKind::Story, "scifi");
        assert!(!wizard.is_selected(PreferenceKind::Story, "scifi"));
    }
}
