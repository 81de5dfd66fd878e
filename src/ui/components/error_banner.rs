//! Inline error banner

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows the banner needs (borders + one line of text)
pub const BANNER_HEIGHT: u16 = 3;

/// Render `message` in a red bordered box
pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled(
            "✗ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(
        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
