//! GitHub REST client for organization membership checks

use super::{GithubApi, ProviderError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, instrument};

/// Default GitHub API address
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("grant-verify-tui/", env!("CARGO_PKG_VERSION"));

/// Client for the GitHub REST API
pub struct GithubClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create a new client against `base_url`, optionally authenticated
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build GitHub HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            token,
        })
    }

    /// Build an endpoint URL with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::Transient(format!("Invalid GitHub API URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::Transient("Invalid GitHub API URL".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, segments: &[&str]) -> Result<Response, ProviderError> {
        let url = self.endpoint(segments)?;
        let mut request = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        Ok(request.send().await?)
    }

    /// Returns true if the resource exists, false on 404
    async fn exists(&self, segments: &[&str]) -> Result<bool, ProviderError> {
        let response = self.get(segments).await?;
        match response.status() {
            s if s.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(classify_failure(&response)),
        }
    }
}

/// Map a non-success status that is not a plain 404
fn classify_failure(response: &Response) -> ProviderError {
    let status = response.status();
    let quota_exhausted = response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "0");

    if status == StatusCode::TOO_MANY_REQUESTS || (status == StatusCode::FORBIDDEN && quota_exhausted)
    {
        ProviderError::RateLimited { provider: "GitHub" }
    } else {
        ProviderError::Transient(format!("GitHub returned {status}"))
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    #[instrument(skip(self))]
    async fn verify_org_membership(&self, org: &str, username: &str) -> Result<(), ProviderError> {
        let response = self
            .get(&["orgs", org, "public_members", username])
            .await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            StatusCode::NOT_FOUND => {
                // 404 covers unknown org, unknown user and private membership alike
                debug!("membership lookup returned 404, probing org and user");
                if !self.exists(&["orgs", org]).await? {
                    return Err(ProviderError::NotFound {
                        what: format!("GitHub organization {org}"),
                    });
                }
                if !self.exists(&["users", username]).await? {
                    return Err(ProviderError::NotFound {
                        what: format!("GitHub user {username}"),
                    });
                }
                Err(ProviderError::NotPublicMember {
                    username: username.to_string(),
                    org: org.to_string(),
                })
            }
            _ => Err(classify_failure(&response)),
        }
    }
}
