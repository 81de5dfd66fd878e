//! Trait abstraction for the provider APIs to enable mocking in tests

use super::ProviderError;
use async_trait::async_trait;

/// Twitter identity check
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TwitterApi: Send + Sync {
    /// Succeeds when the authenticated profile's username is exactly `handle`
    async fn verify_handle(&self, handle: &str) -> Result<(), ProviderError>;
}

/// GitHub organization membership check
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Succeeds when `username` is a public member of `org`
    async fn verify_org_membership(&self, org: &str, username: &str)
        -> Result<(), ProviderError>;
}
