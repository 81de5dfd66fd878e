//! Verification step coordinator
//!
//! Owns both provider checks, feeds them claims built from the shared
//! draft, and folds their results into one error banner. Advancing past the
//! step is never blocked: an unverified identity is reported, not enforced.

use super::check::{CheckCompletion, GithubVerifier, ProviderCheck, TwitterVerifier};
use super::claim::{Provider, VerificationClaim, VerificationOutcome};
use crate::providers::{GithubApi, TwitterApi};
use crate::state::{DraftField, FormDraftPatch, FormMetadataStore, FormStep};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// The single error banner of the step
#[derive(Debug, Clone, PartialEq, Eq)]
struct ErrorBanner {
    message: String,
    /// Provider whose failure posted the message, if any
    source: Option<Provider>,
}

pub struct VerificationCoordinator {
    store: Arc<dyn FormMetadataStore>,
    twitter: ProviderCheck,
    github: ProviderCheck,
    banner: Option<ErrorBanner>,
    completions: UnboundedSender<CheckCompletion>,
    active: bool,
}

impl VerificationCoordinator {
    /// Create a coordinator and the receiver its check results arrive on
    pub fn new(
        store: Arc<dyn FormMetadataStore>,
        twitter: Arc<dyn TwitterApi>,
        github: Arc<dyn GithubApi>,
    ) -> (Self, UnboundedReceiver<CheckCompletion>) {
        let (completions, receiver) = mpsc::unbounded_channel();
        let coordinator = Self {
            store,
            twitter: ProviderCheck::new(
                Provider::Twitter,
                Arc::new(TwitterVerifier::new(twitter)),
            ),
            github: ProviderCheck::new(Provider::Github, Arc::new(GithubVerifier::new(github))),
            banner: None,
            completions,
            active: false,
        };
        (coordinator, receiver)
    }

    fn check_mut(&mut self, provider: Provider) -> &mut ProviderCheck {
        match provider {
            Provider::Twitter => &mut self.twitter,
            Provider::Github => &mut self.github,
        }
    }

    fn check(&self, provider: Provider) -> &ProviderCheck {
        match provider {
            Provider::Twitter => &self.twitter,
            Provider::Github => &self.github,
        }
    }

    /// Enter the step: start from scratch and check whatever is filled in
    pub fn activate(&mut self) {
        self.active = true;
        self.banner = None;
        self.twitter.reset();
        self.github.reset();
        for provider in Provider::ALL {
            self.evaluate(provider);
        }
    }

    /// Leave the step; results still in flight will be ignored
    pub fn deactivate(&mut self) {
        self.active = false;
        self.twitter.supersede();
        self.github.supersede();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Write a field through the store and re-check the affected provider(s)
    pub fn on_field_change(&mut self, field: DraftField, value: impl Into<String>) {
        self.store.write(FormDraftPatch::single(field, value));

        if !self.active || !field.is_verification_subject() {
            return;
        }
        for provider in Provider::ALL {
            if provider.subject_fields().contains(&field) {
                self.evaluate(provider);
            }
        }
    }

    fn evaluate(&mut self, provider: Provider) {
        let claim = VerificationClaim::from_draft(provider, &self.store.read());
        let completions = self.completions.clone();
        if self.check_mut(provider).evaluate(claim, &completions) {
            // A new attempt (or a now-incomplete claim) retires this provider's error
            self.clear_banner_from(provider);
        }
    }

    fn clear_banner_from(&mut self, provider: Provider) {
        if self
            .banner
            .as_ref()
            .is_some_and(|b| b.source == Some(provider))
        {
            self.banner = None;
        }
    }

    /// Fold a finished check into the step state
    pub fn apply(&mut self, completion: CheckCompletion) {
        if !self.active {
            debug!(provider = %completion.provider, "step inactive, ignoring result");
            return;
        }

        // A provider's own banner was already cleared when this attempt began
        let provider = completion.provider;
        let mut failure = None;
        self.check_mut(provider)
            .apply(completion, |reason| failure = Some(reason.to_string()));
        if let Some(reason) = failure {
            self.post_error(reason, Some(provider));
        }
    }

    /// Replace the banner text; the last error always wins
    pub fn record_error(&mut self, reason: impl Into<String>) {
        self.post_error(reason.into(), None);
    }

    fn post_error(&mut self, message: String, source: Option<Provider>) {
        self.banner = Some(ErrorBanner { message, source });
    }

    pub fn error_message(&self) -> Option<&str> {
        self.banner.as_ref().map(|b| b.message.as_str())
    }

    pub fn outcome(&self, provider: Provider) -> &VerificationOutcome {
        self.check(provider).outcome()
    }

    pub fn checked_at(&self, provider: Provider) -> Option<DateTime<Utc>> {
        self.check(provider).checked_at()
    }

    /// Verification is informational; leaving the step is always allowed
    pub fn can_advance(&self) -> bool {
        true
    }

    /// "Skip" when nothing was entered to verify, "Next" otherwise
    pub fn advance_label(&self) -> &'static str {
        if self.store.read().has_no_verification_subjects() {
            "Skip"
        } else {
            "Next"
        }
    }

    /// Back to the metadata step; the draft and outcomes are left as they are
    pub fn back(&mut self) -> FormStep {
        self.deactivate();
        FormStep::Metadata
    }

    /// On to the preview, carrying the draft unchanged
    pub fn advance(&mut self) -> FormStep {
        self.deactivate();
        FormStep::Preview
    }
}
