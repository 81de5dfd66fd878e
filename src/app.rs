//! Application state and core logic

use crate::config::VerifyConfig;
use crate::providers::{GithubApi, GithubClient, TwitterApi, TwitterClient};
use crate::state::{
    AppState, FormButton, FormDraft, FormDraftPatch, FormField, FormMetadataStore, FormStep,
    InMemoryFormStore, Submission,
};
use crate::verification::{CheckCompletion, Provider, VerificationCoordinator};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Owner of the project draft
    pub store: Arc<dyn FormMetadataStore>,
    /// Verification step workflow
    pub verification: VerificationCoordinator,
    /// Results of finished provider checks
    completions: UnboundedReceiver<CheckCompletion>,
    /// Where submitted applications are written
    submissions_dir: PathBuf,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured provider APIs
    pub fn new(config: &VerifyConfig) -> Result<Self> {
        let timeout = config.request_timeout();
        let github = GithubClient::new(
            config.github_api_url(),
            config.github_token.clone(),
            timeout,
        )?;
        let twitter = TwitterClient::new(
            config.twitter_api_url(),
            config.twitter_access_token.clone(),
            timeout,
        )?;
        if config.twitter_access_token.is_none() {
            info!("no Twitter access token configured, Twitter checks will ask to sign in");
        }

        Ok(Self::with_providers(
            Arc::new(InMemoryFormStore::new()),
            Arc::new(twitter),
            Arc::new(github),
            VerifyConfig::submissions_dir(),
        ))
    }

    /// Create an App from explicit collaborators
    pub fn with_providers(
        store: Arc<dyn FormMetadataStore>,
        twitter: Arc<dyn TwitterApi>,
        github: Arc<dyn GithubApi>,
        submissions_dir: PathBuf,
    ) -> Self {
        let (verification, completions) =
            VerificationCoordinator::new(Arc::clone(&store), twitter, github);
        Self {
            state: AppState::default(),
            store,
            verification,
            completions,
            submissions_dir,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while either provider is waiting on its API
    pub fn has_pending_checks(&self) -> bool {
        Provider::ALL
            .iter()
            .any(|p| self.verification.outcome(*p).is_pending())
    }

    /// Hand every finished check to the coordinator; returns how many arrived
    pub fn drain_completions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(completion) = self.completions.try_recv() {
            self.verification.apply(completion);
            count += 1;
        }
        count
    }

    /// Switch form step, entering or leaving the verification workflow
    pub fn set_step(&mut self, step: FormStep) {
        let leaving = self.state.step;
        if leaving == step {
            return;
        }
        debug!(from = ?leaving, to = ?step, "changing form step");

        if step == FormStep::Verification {
            self.verification.activate();
        } else if self.verification.is_active() {
            self.verification.deactivate();
        }

        self.state.step = step;
        self.state.current_form_mut().reset_focus();
    }

    /// Handle a key press for the current step
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.state.status_message = None;

        if key.code == KeyCode::Esc {
            self.handle_escape();
            return;
        }

        if let Some(button) = self.handle_form_key(key) {
            self.press(button);
        }
    }

    fn handle_escape(&mut self) {
        match self.state.step {
            FormStep::Metadata => self.quit = true,
            FormStep::Verification => self.press(FormButton::Back),
            FormStep::Preview => self.set_step(FormStep::Verification),
        }
    }

    /// Focus movement and text entry; returns a button if one was activated
    fn handle_form_key(&mut self, key: KeyEvent) -> Option<FormButton> {
        let on_buttons = self.state.current_form().is_buttons_row_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.current_form_mut().next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.current_form_mut().prev_field(),
            KeyCode::Left | KeyCode::Char('h') if on_buttons => {
                self.state.current_form_mut().prev_button()
            }
            KeyCode::Right | KeyCode::Char('l') if on_buttons => {
                self.state.current_form_mut().next_button()
            }
            KeyCode::Enter if on_buttons => return self.state.current_form().selected(),
            KeyCode::Enter => {
                let multiline = self
                    .state
                    .current_form()
                    .active_field()
                    .is_some_and(|f| f.is_multiline);
                if multiline {
                    self.edit_active_field(|field, draft| field.with_char(draft, '\n'));
                } else {
                    self.state.current_form_mut().next_field();
                }
            }
            KeyCode::Backspace if !on_buttons => {
                self.edit_active_field(|field, draft| field.without_last_char(draft));
            }
            KeyCode::Char(c)
                if !on_buttons
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.edit_active_field(|field, draft| field.with_char(draft, c));
            }
            _ => {}
        }
        None
    }

    /// Apply an edit to the focused field through the store
    fn edit_active_field(&mut self, edit: impl FnOnce(&FormField, &FormDraft) -> String) {
        let Some(field) = self.state.current_form().active_field().cloned() else {
            return;
        };
        let value = edit(&field, &self.store.read());

        if self.state.step == FormStep::Verification {
            self.verification.on_field_change(field.field, value);
        } else {
            self.store.write(FormDraftPatch::single(field.field, value));
        }
    }

    fn press(&mut self, button: FormButton) {
        match (self.state.step, button) {
            (FormStep::Metadata, FormButton::Discard) => self.abandon(),
            (FormStep::Metadata, FormButton::Advance) => self.set_step(FormStep::Verification),
            (FormStep::Verification, FormButton::Back) => {
                let step = self.verification.back();
                self.set_step(step);
            }
            (FormStep::Verification, FormButton::Advance) => {
                if self.verification.can_advance() {
                    let step = self.verification.advance();
                    self.set_step(step);
                }
            }
            (FormStep::Preview, FormButton::Back) => self.set_step(FormStep::Verification),
            (FormStep::Preview, FormButton::Submit) => self.submit(),
            (step, button) => debug!(?step, ?button, "button not available on this step"),
        }
    }

    /// Drop the draft and start over
    fn abandon(&mut self) {
        info!("project draft discarded");
        self.store.reset();
        self.state.reset_forms();
        self.state.status_message = Some("Draft discarded".to_string());
    }

    /// Write the draft out and reset the form; on failure the draft is kept
    fn submit(&mut self) {
        let submission = Submission::new(self.store.read());
        match submission.save(&self.submissions_dir) {
            Ok(path) => {
                info!(id = %submission.id, path = %path.display(), "application submitted");
                self.store.reset();
                self.state.reset_forms();
                self.state.status_message =
                    Some(format!("Application saved to {}", path.display()));
                self.state.last_submission = Some(path);
                self.set_step(FormStep::Metadata);
            }
            Err(err) => {
                error!("failed to save application: {err:#}");
                self.state.status_message = Some(format!("Could not save application: {err}"));
            }
        }
    }
}
