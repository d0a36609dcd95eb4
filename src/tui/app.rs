//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the wizard selections, the focus cursor, and the pending-submit deadline.

use std::time::{Duration, Instant};

use crate::models::PreferenceKind;
use crate::wizard::WizardState;

/// Simulated submit latency before navigating to the story screen
pub const SUBMIT_DELAY: Duration = Duration::from_millis(500);

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Preferences,
    Story,
}

/// Which wizard control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Age,
    Story,
    Voice,
    Next,
}

impl Focus {
    /// The preference category under focus, if a section is focused
    pub fn kind(&self) -> Option<PreferenceKind> {
        match self {
            Self::Age => Some(PreferenceKind::Age),
            Self::Story => Some(PreferenceKind::Story),
            Self::Voice => Some(PreferenceKind::Voice),
            Self::Next => None,
        }
    }

    /// Focus target after this one (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::Age => Self::Story,
            Self::Story => Self::Voice,
            Self::Voice => Self::Next,
            Self::Next => Self::Age,
        }
    }

    /// Focus target before this one (wraps around)
    pub fn prev(&self) -> Self {
        match self {
            Self::Age => Self::Next,
            Self::Story => Self::Age,
            Self::Voice => Self::Story,
            Self::Next => Self::Voice,
        }
    }
}

/// Main application state
pub struct App {
    /// Wizard selections and submit gate
    pub wizard: WizardState,

    /// Currently active screen
    pub screen: Screen,

    /// Focused wizard control
    pub focus: Focus,

    /// Card cursor within the focused section
    pub selected_card: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the help dialog is shown
    pub show_help: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Deadline of the in-flight submit, if any
    pending_submit: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        Self {
            wizard: WizardState::new(),
            screen: Screen::default(),
            focus: Focus::default(),
            selected_card: 0,
            should_quit: false,
            show_help: false,
            status_message: None,
            pending_submit: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        // A quit tears the wizard down; never leave a submit pending
        self.cancel_submit();
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Move focus to the next control
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.selected_card = 0;
    }

    /// Move focus to the previous control
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.selected_card = 0;
    }

    /// Move the card cursor left in the focused section
    pub fn move_card_left(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    /// Move the card cursor right in the focused section
    pub fn move_card_right(&mut self) {
        if let Some(kind) = self.focus.kind() {
            let max = kind.options().len();
            if self.selected_card < max.saturating_sub(1) {
                self.selected_card += 1;
            }
        }
    }

    /// Move the card cursor to a specific card (1-based, from number keys)
    pub fn jump_to_card(&mut self, n: usize) {
        if let Some(kind) = self.focus.kind() {
            if n >= 1 && n <= kind.options().len() {
                self.selected_card = n - 1;
            }
        }
    }

    /// Activate the focused control: select a card, or submit on Next
    pub fn activate(&mut self) {
        self.clear_status();
        match self.focus.kind() {
            Some(kind) => {
                if let Some(opt) = kind.options().get(self.selected_card) {
                    self.wizard.select(kind, opt.id);
                }
            }
            None => self.submit(),
        }
    }

    /// Start the submit flow if the wizard is complete
    pub fn submit(&mut self) {
        if self.wizard.begin_submit() {
            self.pending_submit = Some(Instant::now() + SUBMIT_DELAY);
        } else if !self.wizard.is_submitting {
            self.set_status("Complete all three steps to continue");
        }
    }

    /// Cancel an in-flight submit, if any
    pub fn cancel_submit(&mut self) {
        if self.pending_submit.take().is_some() {
            self.wizard.cancel_submit();
            self.set_status("Submit cancelled");
        }
    }

    /// Check whether a pending submit has reached its deadline
    ///
    /// Navigates to the story screen and returns true exactly once per
    /// submit; before the deadline (or with no submit pending) it returns
    /// false and changes nothing.
    pub fn poll_submit(&mut self, now: Instant) -> bool {
        match self.pending_submit {
            Some(deadline) if now >= deadline => {
                self.pending_submit = None;
                self.screen = Screen::Story;
                true
            }
            _ => false,
        }
    }

    /// Whether a submit is waiting on its deadline
    pub fn has_pending_submit(&self) -> bool {
        self.pending_submit.is_some()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_wizard(app: &mut App) {
        app.wizard.set_age("3-5");
        app.wizard.toggle_style("warm");
        app.wizard.set_voice("default");
    }

    #[test]
    fn test_focus_cycles_through_all_controls() {
        let mut app = App::new();
        assert_eq!(app.focus, Focus::Age);
        app.focus_next();
        assert_eq!(app.focus, Focus::Story);
        app.focus_next();
        assert_eq!(app.focus, Focus::Voice);
        app.focus_next();
        assert_eq!(app.focus, Focus::Next);
        app.focus_next();
        assert_eq!(app.focus, Focus::Age);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Next);
    }

    #[test]
    fn test_focus_change_resets_card_cursor() {
        let mut app = App::new();
        app.move_card_right();
        assert_eq!(app.selected_card, 1);
        app.focus_next();
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_card_cursor_clamped_to_section() {
        let mut app = App::new();
        // Age has 3 options
        for _ in 0..10 {
            app.move_card_right();
        }
        assert_eq!(app.selected_card, 2);
        app.move_card_left();
        app.move_card_left();
        app.move_card_left();
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_jump_to_card_bounds() {
        let mut app = App::new();
        app.jump_to_card(3);
        assert_eq!(app.selected_card, 2);
        app.jump_to_card(4);
        assert_eq!(app.selected_card, 2, "out-of-range jump is ignored");
        app.jump_to_card(0);
        assert_eq!(app.selected_card, 2);
    }

    #[test]
    fn test_activate_selects_focused_card() {
        let mut app = App::new();
        app.jump_to_card(2);
        app.activate();
        assert_eq!(app.wizard.selected_age, "6-8");

        app.focus_next();
        app.activate();
        assert!(app.wizard.is_selected(crate::models::PreferenceKind::Story, "warm"));
        // Activating again toggles the style back off
        app.activate();
        assert!(!app.wizard.is_selected(crate::models::PreferenceKind::Story, "warm"));
    }

    #[test]
    fn test_submit_incomplete_sets_status() {
        let mut app = App::new();
        app.submit();
        assert!(!app.wizard.is_submitting);
        assert!(!app.has_pending_submit());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_submit_sets_submitting_immediately() {
        let mut app = App::new();
        complete_wizard(&mut app);
        app.submit();
        assert!(app.wizard.is_submitting);
        assert!(app.has_pending_submit());
    }

    #[test]
    fn test_navigation_waits_for_deadline() {
        let mut app = App::new();
        complete_wizard(&mut app);
        app.submit();

        // Before the deadline: no navigation
        assert!(!app.poll_submit(Instant::now()));
        assert_eq!(app.screen, Screen::Preferences);

        // At/after the deadline: navigate exactly once
        let later = Instant::now() + SUBMIT_DELAY + Duration::from_millis(100);
        assert!(app.poll_submit(later));
        assert_eq!(app.screen, Screen::Story);
        assert!(!app.poll_submit(later));
    }

    #[test]
    fn test_cancel_submit_resets_gate() {
        let mut app = App::new();
        complete_wizard(&mut app);
        app.submit();

        app.cancel_submit();
        assert!(!app.wizard.is_submitting);
        assert!(!app.has_pending_submit());

        // No navigation fires after cancellation
        let later = Instant::now() + SUBMIT_DELAY + Duration::from_millis(100);
        assert!(!app.poll_submit(later));
        assert_eq!(app.screen, Screen::Preferences);

        // The control is usable again
        app.submit();
        assert!(app.wizard.is_submitting);
    }

    #[test]
    fn test_quit_cancels_pending_submit() {
        let mut app = App::new();
        complete_wizard(&mut app);
        app.submit();

        app.quit();
        assert!(app.should_quit);
        assert!(!app.has_pending_submit());
        assert!(!app.wizard.is_submitting);
    }
}
