//! Preview step rendering

use super::button_row::{default_label, draw_button_row};
use crate::app::App;
use crate::state::DraftField;
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PREVIEW_FIELDS: &[(DraftField, &str)] = &[
    (DraftField::Title, "Name"),
    (DraftField::Website, "Website"),
    (DraftField::ProjectTwitter, "Twitter"),
    (DraftField::UserGithub, "GitHub user"),
    (DraftField::ProjectGithub, "GitHub org"),
    (DraftField::Description, "Description"),
];

/// Draw the read-only application preview
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.preview_form;
    let draft = app.store.read();

    let block = Block::default()
        .title(format!(" {} ", form.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .margin(1)
        .split(inner);

    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for (field, label) in PREVIEW_FIELDS {
        let value = draft.get(*field);
        let value_span = if value.is_empty() {
            Span::styled("(empty)", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(value.to_string())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<12}"), label_style),
            value_span,
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);
    draw_button_row(frame, chunks[1], form, default_label);
}
