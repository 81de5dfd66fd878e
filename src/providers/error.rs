//! Provider-level verification failures

use thiserror::Error;

/// Why a provider could not confirm an identity claim.
///
/// The `Display` text is what ends up in the error banner, so every variant
/// reads as a complete sentence fragment a user can act on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No authenticated session exists for the provider
    #[error("Not signed in to {provider}. Connect your {provider} account to verify")]
    AuthMissing { provider: &'static str },

    /// The authenticated identity is not the claimed one
    #[error("Signed in as {actual}, which does not match {claimed}")]
    ClaimMismatch { claimed: String, actual: String },

    /// The organization or user does not exist
    #[error("{what} was not found")]
    NotFound { what: String },

    /// GitHub only: the user exists but is not a public member of the org
    #[error("{username} is not a public member of {org}")]
    NotPublicMember { username: String, org: String },

    /// The provider refused the request because of rate limiting
    #[error("{provider} rate limit reached, edit the field to try again later")]
    RateLimited { provider: &'static str },

    /// Network failure or unexpected response
    #[error("Verification failed: {0}")]
    Transient(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transient(err.to_string())
    }
}
