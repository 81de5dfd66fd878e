//! Identity claims and their outcomes

use crate::state::{DraftField, FormDraft};
use std::fmt;

/// Identity provider a claim is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Twitter,
    Github,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Twitter, Provider::Github];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Github => "GitHub",
        }
    }

    /// Draft fields that make up this provider's claim subject
    pub fn subject_fields(&self) -> &'static [DraftField] {
        match self {
            Self::Twitter => &[DraftField::ProjectTwitter],
            Self::Github => &[DraftField::UserGithub, DraftField::ProjectGithub],
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the user asserts about their project's identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationClaim {
    /// The project's Twitter handle
    Twitter { handle: String },
    /// The user is a public member of the project's GitHub org
    Github { org: String, username: String },
}

impl VerificationClaim {
    /// Build the claim for `provider` from the current draft
    pub fn from_draft(provider: Provider, draft: &FormDraft) -> Self {
        match provider {
            Provider::Twitter => Self::Twitter {
                handle: draft.get(DraftField::ProjectTwitter).to_string(),
            },
            Provider::Github => Self::Github {
                org: draft.get(DraftField::ProjectGithub).to_string(),
                username: draft.get(DraftField::UserGithub).to_string(),
            },
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            Self::Twitter { .. } => Provider::Twitter,
            Self::Github { .. } => Provider::Github,
        }
    }

    /// A claim may be checked only when every subject field is non-empty
    pub fn is_eligible(&self) -> bool {
        match self {
            Self::Twitter { handle } => !handle.is_empty(),
            Self::Github { org, username } => !org.is_empty() && !username.is_empty(),
        }
    }
}

/// Verification result for one provider at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VerificationOutcome {
    #[default]
    NotAttempted,
    Pending,
    Verified,
    Failed(String),
}

impl VerificationOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Short status text shown next to the provider's fields
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::NotAttempted => "",
            Self::Pending => "Verifying…",
            Self::Verified => "✓ Verified",
            Self::Failed(_) => "✗ Not verified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(twitter: &str, user: &str, org: &str) -> FormDraft {
        FormDraft {
            project_twitter: Some(twitter.to_string()),
            user_github: Some(user.to_string()),
            project_github: Some(org.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_twitter_claim_from_draft() {
        let claim = VerificationClaim::from_draft(Provider::Twitter, &draft("acme", "", ""));
        assert_eq!(
            claim,
            VerificationClaim::Twitter {
                handle: "acme".to_string()
            }
        );
        assert!(claim.is_eligible());
        assert_eq!(claim.provider(), Provider::Twitter);
    }

    #[test]
    fn test_github_claim_needs_both_fields() {
        let only_user = VerificationClaim::from_draft(Provider::Github, &draft("", "alice", ""));
        assert!(!only_user.is_eligible());

        let only_org = VerificationClaim::from_draft(Provider::Github, &draft("", "", "Acme"));
        assert!(!only_org.is_eligible());

        let both = VerificationClaim::from_draft(Provider::Github, &draft("", "alice", "Acme"));
        assert!(both.is_eligible());
        assert_eq!(
            both,
            VerificationClaim::Github {
                org: "Acme".to_string(),
                username: "alice".to_string(),
            }
        );
    }

    #[test]
    fn test_unset_fields_are_ineligible() {
        let claim = VerificationClaim::from_draft(Provider::Twitter, &FormDraft::default());
        assert!(!claim.is_eligible());
    }

    #[test]
    fn test_subject_fields() {
        assert_eq!(
            Provider::Twitter.subject_fields(),
            &[DraftField::ProjectTwitter]
        );
        assert_eq!(
            Provider::Github.subject_fields(),
            &[DraftField::UserGithub, DraftField::ProjectGithub]
        );
    }

    #[test]
    fn test_default_outcome_is_not_attempted() {
        assert_eq!(VerificationOutcome::default(), VerificationOutcome::NotAttempted);
        assert_eq!(VerificationOutcome::NotAttempted.status_label(), "");
    }
}
