//! Identity provider APIs used by the verification step
//!
//! - `traits`: the abstract provider contracts
//! - `github`: GitHub REST client (public org membership)
//! - `twitter`: Twitter API v2 client (authenticated handle)

mod error;
mod github;
mod traits;
mod twitter;

pub use error::ProviderError;
pub use github::{GithubClient, DEFAULT_GITHUB_API};
pub use traits::{GithubApi, TwitterApi};
pub use twitter::{TwitterClient, DEFAULT_TWITTER_API};

#[cfg(test)]
pub use traits::{MockGithubApi, MockTwitterApi};
