//! Layout components (step header, status bar)

use crate::app::App;
use crate::state::FormStep;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const STEPS: [FormStep; 3] = [FormStep::Metadata, FormStep::Verification, FormStep::Preview];

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the step breadcrumb, highlighting the current step
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " New Project  ",
        Style::default().add_modifier(Modifier::BOLD),
    )];

    for (idx, step) in STEPS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *step == app.state.step {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{} {}", step.position(), step.label()),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar: last status message, otherwise key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(message) = &app.state.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let esc_hint = match app.state.step {
            FormStep::Metadata => "quit",
            FormStep::Verification | FormStep::Preview => "back",
        };
        let mut spans = vec![Span::styled(
            format!(" Tab: next field  ←/→: choose button  Enter: select  Esc: {esc_hint}"),
            Style::default().fg(Color::DarkGray),
        )];
        if app.has_pending_checks() {
            spans.push(Span::styled(
                "  • checking identities…",
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}
