//! Wizard header view
//!
//! Shows the onboarding prompt and the completion progress bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the header: title line plus progress gauge
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Progress bar
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new("为了更好的了解您的偏好，请完成下面的步骤")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, chunks[0]);

    // Keep the gauge narrower than the full width, like the source layout
    let gauge_area = centered_horizontal(chunks[1], 50);
    let progress = app.wizard.progress();

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        // The stored value tops out at 99.99; the label rounds for display
        .ratio(progress / 100.0)
        .label(format!("{:.0}%", progress));
    frame.render_widget(gauge, gauge_area);
}

/// Center a rect horizontally at the given percentage width
fn centered_horizontal(area: Rect, percent_x: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area)[1]
}
