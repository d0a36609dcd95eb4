//! Wizard footer view
//!
//! Shows the Next button, key hints, and any status message.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the footer
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Next button
            Constraint::Length(1), // Status / hints
            Constraint::Min(0),
        ])
        .split(area);

    render_next_button(frame, app, chunks[0]);
    render_status_line(frame, app, chunks[1]);
}

/// Render the Next button with its enabled/disabled/submitting state
fn render_next_button(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Next;

    let (label, style) = if app.wizard.is_submitting {
        (
            "· · · 提交中 · · ·",
            Style::default().fg(Color::Yellow),
        )
    } else if app.wizard.can_submit() {
        (
            "[ 下一步 ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("[ 下一步 ]", Style::default().fg(Color::DarkGray))
    };

    let style = if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };

    let button = Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center);
    frame.render_widget(button, area);
}

/// Render the status message or key hints
fn render_status_line(frame: &mut Frame, app: &mut App, area: Rect) {
    let line = if let Some(ref message) = app.status_message {
        Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "Tab:Section  ←/→:Card  Space:Select  Enter:Next  ?:Help  q:Quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
