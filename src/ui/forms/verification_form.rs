//! Verification step rendering

use super::button_row::{default_label, draw_button_row};
use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::state::{DraftField, FormButton};
use crate::ui::components::{render_error_banner, BANNER_HEIGHT, BUTTON_HEIGHT};
use crate::verification::{Provider, VerificationOutcome};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

/// Status badge for the field that completes a provider's claim
fn status_badge(app: &App, provider: Provider) -> Option<Span<'static>> {
    let outcome = app.verification.outcome(provider);
    let color = match outcome {
        VerificationOutcome::NotAttempted => return None,
        VerificationOutcome::Pending => Color::Yellow,
        VerificationOutcome::Verified => Color::Green,
        VerificationOutcome::Failed(_) => Color::Red,
    };

    let text = match (outcome, app.verification.checked_at(provider)) {
        (VerificationOutcome::Verified, Some(at)) => format!(
            " {} {} ",
            outcome.status_label(),
            at.with_timezone(&Local).format("%H:%M")
        ),
        _ => format!(" {} ", outcome.status_label()),
    };
    Some(Span::styled(text, Style::default().fg(color)))
}

/// Draw the verification form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.verification_form;
    let draft = app.store.read();
    let error = app.verification.error_message();

    let block = Block::default()
        .title(format!(" {} ", form.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Intro
            Constraint::Length(3), // Twitter
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // GitHub user
            Constraint::Length(3), // GitHub org
            Constraint::Length(2), // Tooltip
            Constraint::Length(if error.is_some() { BANNER_HEIGHT } else { 0 }),
            Constraint::Min(0),                // Remaining space
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .margin(1)
        .split(inner);

    draw_help_text(
        frame,
        chunks[0],
        "Optionally prove you control your project's Twitter and GitHub. \
         Unverified identities do not stop the application.",
    );

    let field_areas = [chunks[1], chunks[3], chunks[4]];
    for (idx, (field, field_area)) in form.fields.iter().zip(field_areas).enumerate() {
        // Badges sit on the last field of each provider's claim
        let status = match field.field {
            DraftField::ProjectTwitter => status_badge(app, Provider::Twitter),
            DraftField::ProjectGithub => status_badge(app, Provider::Github),
            _ => None,
        };
        draw_field(
            frame,
            field_area,
            field,
            field.value(&draft),
            form.active_field_index == idx,
            status,
        );
    }

    if let Some(tooltip) = form.active_field().and_then(|f| f.tooltip) {
        draw_help_text(frame, chunks[5], tooltip);
    }

    if let Some(message) = error {
        render_error_banner(frame, chunks[6], message);
    }

    let advance_label = app.verification.advance_label();
    draw_button_row(frame, chunks[8], form, |button| match button {
        FormButton::Advance => advance_label,
        other => default_label(other),
    });
}
