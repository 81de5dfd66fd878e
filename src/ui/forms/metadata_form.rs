//! Project details step rendering

use super::button_row::{default_label, draw_button_row};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::ui::components::BUTTON_HEIGHT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the project details form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.metadata_form;
    let draft = app.store.read();

    let block = Block::default()
        .title(format!(" {} ", form.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Website
            Constraint::Min(6),                // Description
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .margin(1)
        .split(inner);

    for (idx, field) in form.fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            field,
            field.value(&draft),
            form.active_field_index == idx,
            None,
        );
    }

    draw_button_row(frame, chunks[3], form, default_label);
}
