//! Preference section view
//!
//! Renders one labeled section of preference cards. All three sections share
//! this implementation; the category tag drives the accent color and title,
//! and selected/unselected card state comes purely from the wizard state.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{PreferenceKind, PreferenceOption};
use crate::tui::app::App;
use crate::tui::layout::card_slots;

/// Accent color for a category (the source design uses blue for age and
/// voice, pink for story styles)
fn accent(kind: PreferenceKind) -> Color {
    match kind {
        PreferenceKind::Age | PreferenceKind::Voice => Color::Blue,
        PreferenceKind::Story => Color::Magenta,
    }
}

/// Render one preference section
pub fn render(frame: &mut Frame, app: &mut App, area: Rect, kind: PreferenceKind) {
    let is_focused = app.focus.kind() == Some(kind);

    let border_color = if is_focused {
        accent(kind)
    } else {
        Color::DarkGray
    };

    let hint = if kind.is_multi() { " (多选) " } else { "" };
    let block = Block::default()
        .title(format!(" {}{}", kind.title(), hint))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let options = kind.options();
    let slots = card_slots(inner, options.len());

    for (i, (option, slot)) in options.iter().zip(slots.iter()).enumerate() {
        let selected = app.wizard.is_selected(kind, option.id);
        let under_cursor = is_focused && app.selected_card == i;
        render_card(frame, *slot, kind, option, selected, under_cursor);
    }
}

/// Render a single preference card
fn render_card(
    frame: &mut Frame,
    area: Rect,
    kind: PreferenceKind,
    option: &PreferenceOption,
    selected: bool,
    under_cursor: bool,
) {
    let border_color = if under_cursor {
        Color::White
    } else if selected {
        accent(kind)
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let text_style = if selected {
        Style::default()
            .fg(accent(kind))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut lines = Vec::new();
    if let Some(icon) = option.icon {
        lines.push(Line::styled(icon.glyph().to_string(), text_style));
    }
    let marker = if selected { "✓ " } else { "" };
    lines.push(Line::styled(format!("{}{}", marker, option.label), text_style));

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(card, area);
}
