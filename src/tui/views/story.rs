//! Story screen placeholder
//!
//! Shown after the wizard submit completes. Story playback lands in a later
//! milestone; for now this confirms onboarding finished.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the story screen
pub fn render(frame: &mut Frame, _app: &mut App) {
    let area = centered_rect(60, 40, frame.area());

    let block = Block::default()
        .title(" 故事时间 ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(""),
        Line::styled(
            "偏好设置完成，即将开始你的故事之旅！",
            Style::default().fg(Color::White),
        ),
        Line::from(""),
        Line::styled("Press q to exit", Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}
