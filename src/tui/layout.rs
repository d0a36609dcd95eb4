//! Layout definitions for the TUI
//!
//! Defines the wizard screen structure: header with progress bar, three
//! preference sections, and the footer with the Next button.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the wizard screen
pub struct WizardLayout {
    /// Title and progress bar
    pub header: Rect,
    /// Age range section
    pub age: Rect,
    /// Story style section
    pub story: Rect,
    /// Voice section
    pub voice: Rect,
    /// Next button and key hints
    pub footer: Rect,
}

impl WizardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header (title + progress)
                Constraint::Length(5), // Age section
                Constraint::Length(5), // Story section
                Constraint::Length(6), // Voice section (larger cards)
                Constraint::Min(3),    // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            age: chunks[1],
            story: chunks[2],
            voice: chunks[3],
            footer: chunks[4],
        }
    }
}

/// Split a section's inner area into equal-width card slots
pub fn card_slots(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints: Vec<Constraint> =
        std::iter::repeat(Constraint::Ratio(1, count as u32))
            .take(count)
            .collect();

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
