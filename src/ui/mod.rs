//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::FormStep;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current step
    match app.state.step {
        FormStep::Metadata => forms::metadata_form::draw(frame, main_area, app),
        FormStep::Verification => forms::verification_form::draw(frame, main_area, app),
        FormStep::Preview => forms::preview::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{MockGithubApi, MockTwitterApi, ProviderError};
    use crate::state::{DraftField, InMemoryFormStore};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        App::with_providers(
            Arc::new(InMemoryFormStore::new()),
            Arc::new(MockTwitterApi::new()),
            Arc::new(MockGithubApi::new()),
            std::env::temp_dir(),
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_verification_step_shows_skip_when_empty() {
        let mut app = app();
        app.set_step(FormStep::Verification);

        let screen = render(&app);
        assert!(screen.contains("Verify Project Ownership"));
        assert!(screen.contains("Skip"));
        assert!(!screen.contains("Next"));
    }

    #[tokio::test]
    async fn test_verification_step_shows_banner_and_next() {
        let mut app = app();
        app.set_step(FormStep::Verification);
        app.store.write(crate::state::FormDraftPatch::single(
            DraftField::UserGithub,
            "alice",
        ));
        app.verification.record_error(
            ProviderError::NotPublicMember {
                username: "alice".into(),
                org: "Acme".into(),
            }
            .to_string(),
        );

        let screen = render(&app);
        assert!(screen.contains("alice is not a public member of Acme"));
        assert!(screen.contains("Next"));
    }

    #[tokio::test]
    async fn test_preview_lists_draft() {
        let mut app = app();
        app.store.write(crate::state::FormDraftPatch::single(
            DraftField::ProjectTwitter,
            "acme",
        ));
        app.set_step(FormStep::Preview);

        let screen = render(&app);
        assert!(screen.contains("Preview Application"));
        assert!(screen.contains("acme"));
        assert!(screen.contains("Submit"));
    }
}
