//! TUI Views module
//!
//! Contains the wizard screen views: header, the three preference sections,
//! footer, and the post-submit story placeholder.

pub mod footer;
pub mod header;
pub mod section;
pub mod story;

use ratatui::Frame;

use super::app::{App, Screen};
use super::dialogs;
use super::layout::WizardLayout;
use crate::models::PreferenceKind;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Preferences => render_wizard(frame, app),
        Screen::Story => story::render(frame, app),
    }

    // Render dialog if active
    if app.show_help {
        dialogs::help::render(frame);
    }
}

/// Render the preference wizard screen
fn render_wizard(frame: &mut Frame, app: &mut App) {
    let layout = WizardLayout::new(frame.area());

    header::render(frame, app, layout.header);
    section::render(frame, app, layout.age, PreferenceKind::Age);
    section::render(frame, app, layout.story, PreferenceKind::Story);
    section::render(frame, app, layout.voice, PreferenceKind::Voice);
    footer::render(frame, app, layout.footer);
}
