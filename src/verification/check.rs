//! Per-provider verification check with last-request-wins semantics

use super::claim::{Provider, VerificationClaim, VerificationOutcome};
use crate::providers::{GithubApi, ProviderError, TwitterApi};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Message sent back to the event loop when a check task finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCompletion {
    pub provider: Provider,
    /// Generation of the request that produced this result
    pub generation: u64,
    pub result: Result<(), ProviderError>,
}

/// Runs a claim against its provider's API
#[async_trait]
pub trait ClaimVerifier: Send + Sync {
    async fn verify(&self, claim: &VerificationClaim) -> Result<(), ProviderError>;
}

/// Twitter flavour: the signed-in profile must own the handle
pub struct TwitterVerifier {
    api: Arc<dyn TwitterApi>,
}

impl TwitterVerifier {
    pub fn new(api: Arc<dyn TwitterApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ClaimVerifier for TwitterVerifier {
    async fn verify(&self, claim: &VerificationClaim) -> Result<(), ProviderError> {
        match claim {
            VerificationClaim::Twitter { handle } => self.api.verify_handle(handle).await,
            other => Err(ProviderError::Transient(format!(
                "{} claim cannot be checked by Twitter",
                other.provider()
            ))),
        }
    }
}

/// GitHub flavour: the user must be a public member of the org
pub struct GithubVerifier {
    api: Arc<dyn GithubApi>,
}

impl GithubVerifier {
    pub fn new(api: Arc<dyn GithubApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ClaimVerifier for GithubVerifier {
    async fn verify(&self, claim: &VerificationClaim) -> Result<(), ProviderError> {
        match claim {
            VerificationClaim::Github { org, username } => {
                self.api.verify_org_membership(org, username).await
            }
            other => Err(ProviderError::Transient(format!(
                "{} claim cannot be checked by GitHub",
                other.provider()
            ))),
        }
    }
}

/// Verification state of one provider.
///
/// Every new claim takes a fresh generation; a completion is only committed
/// when its generation is still current. Starting a new attempt aborts the
/// request still in flight, so at most one provider call runs at a time.
pub struct ProviderCheck {
    provider: Provider,
    verifier: Arc<dyn ClaimVerifier>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    claim: Option<VerificationClaim>,
    outcome: VerificationOutcome,
    checked_at: Option<DateTime<Utc>>,
}

impl ProviderCheck {
    pub fn new(provider: Provider, verifier: Arc<dyn ClaimVerifier>) -> Self {
        Self {
            provider,
            verifier,
            generation: 0,
            in_flight: None,
            claim: None,
            outcome: VerificationOutcome::NotAttempted,
            checked_at: None,
        }
    }

    pub fn outcome(&self) -> &VerificationOutcome {
        &self.outcome
    }

    pub fn checked_at(&self) -> Option<DateTime<Utc>> {
        self.checked_at
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Retire the current attempt: abort its task and move to a new generation
    fn cancel_in_flight(&mut self) {
        if let Some(task) = self.in_flight.take() {
            if !task.is_finished() {
                debug!(
                    provider = %self.provider,
                    generation = self.generation,
                    "aborting in-flight check"
                );
            }
            task.abort();
        }
        self.generation += 1;
    }

    /// Start checking `claim` if it differs from the last one evaluated.
    ///
    /// Returns true when a new attempt began (which supersedes any request
    /// still in flight), false when the subject is unchanged. Ineligible
    /// claims never reach the network and leave the outcome `NotAttempted`.
    pub fn evaluate(
        &mut self,
        claim: VerificationClaim,
        completions: &UnboundedSender<CheckCompletion>,
    ) -> bool {
        if self.claim.as_ref() == Some(&claim) {
            return false;
        }

        self.cancel_in_flight();
        self.checked_at = None;
        self.claim = Some(claim.clone());

        if !claim.is_eligible() {
            debug!(provider = %self.provider, "claim incomplete, not checking");
            self.outcome = VerificationOutcome::NotAttempted;
            return true;
        }

        self.outcome = VerificationOutcome::Pending;
        let provider = self.provider;
        let generation = self.generation;
        let verifier = Arc::clone(&self.verifier);
        let completions = completions.clone();
        debug!(%provider, generation, ?claim, "starting verification");

        self.in_flight = Some(tokio::spawn(async move {
            let result = verifier.verify(&claim).await;
            let completion = CheckCompletion {
                provider,
                generation,
                result,
            };
            if completions.send(completion).is_err() {
                debug!(%provider, generation, "event loop gone, dropping result");
            }
        }));

        true
    }

    /// Commit a finished request if it is still the current one.
    ///
    /// `on_failure` is called with the reason on every transition into
    /// `Failed`. Returns true when the completion was committed.
    pub fn apply(&mut self, completion: CheckCompletion, on_failure: impl FnOnce(&str)) -> bool {
        if completion.generation != self.generation || !self.outcome.is_pending() {
            debug!(
                provider = %self.provider,
                stale = completion.generation,
                current = self.generation,
                "discarding superseded result"
            );
            return false;
        }

        self.checked_at = Some(Utc::now());
        self.outcome = match completion.result {
            Ok(()) => {
                info!(provider = %self.provider, "identity verified");
                VerificationOutcome::Verified
            }
            Err(err) => {
                let reason = err.to_string();
                warn!(provider = %self.provider, %reason, "identity verification failed");
                on_failure(&reason);
                VerificationOutcome::Failed(reason)
            }
        };
        true
    }

    /// Abort any in-flight request without touching the outcome
    pub fn supersede(&mut self) {
        self.cancel_in_flight();
    }

    /// Forget everything, as if the step had never been shown
    pub fn reset(&mut self) {
        self.cancel_in_flight();
        self.claim = None;
        self.outcome = VerificationOutcome::NotAttempted;
        self.checked_at = None;
    }
}
