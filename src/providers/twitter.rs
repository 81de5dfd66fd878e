//! Twitter API v2 client for handle ownership checks

use super::{ProviderError, TwitterApi};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default Twitter API address
pub const DEFAULT_TWITTER_API: &str = "https://api.twitter.com";

/// Response of `GET /2/users/me`
#[derive(Debug, Deserialize)]
struct MeResponse {
    data: MeData,
}

#[derive(Debug, Deserialize)]
struct MeData {
    username: String,
}

/// Client for the Twitter API, acting on behalf of the signed-in user
pub struct TwitterClient {
    http: Client,
    base_url: String,
    /// OAuth 2.0 user access token; `None` means the user never connected
    access_token: Option<String>,
}

impl TwitterClient {
    /// Create a new client against `base_url`
    pub fn new(
        base_url: impl Into<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build Twitter HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token,
        })
    }

    /// Username of the authenticated session
    async fn authenticated_username(&self, token: &str) -> Result<String, ProviderError> {
        let response = self
            .http
            .get(format!("{}/2/users/me", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            s if s.is_success() => {
                let me: MeResponse = response.json().await?;
                Ok(me.data.username)
            }
            StatusCode::UNAUTHORIZED => Err(ProviderError::AuthMissing {
                provider: "Twitter",
            }),
            StatusCode::TOO_MANY_REQUESTS => Err(ProviderError::RateLimited {
                provider: "Twitter",
            }),
            status => Err(ProviderError::Transient(format!(
                "Twitter returned {status}"
            ))),
        }
    }
}

#[async_trait]
impl TwitterApi for TwitterClient {
    #[instrument(skip(self))]
    async fn verify_handle(&self, handle: &str) -> Result<(), ProviderError> {
        let Some(token) = self.access_token.as_deref() else {
            return Err(ProviderError::AuthMissing {
                provider: "Twitter",
            });
        };

        let username = self.authenticated_username(token).await?;
        debug!(%username, "resolved authenticated Twitter user");

        if username == handle {
            Ok(())
        } else {
            Err(ProviderError::ClaimMismatch {
                claimed: handle.to_string(),
                actual: username,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, token: Option<&str>) -> TwitterClient {
        TwitterClient::new(
            server.uri(),
            token.map(str::to_string),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    async fn mount_me(server: &MockServer, username: &str) {
        Mock::given(method("GET"))
            .and(path("/2/users/me"))
            .and(header("authorization", "Bearer tw-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": "1", "name": "Acme", "username": username}
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_matching_handle_is_verified() {
        let server = MockServer::start().await;
        mount_me(&server, "acme").await;

        let result = client(&server, Some("tw-token")).verify_handle("acme").await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_handle_comparison_is_case_sensitive() {
        let server = MockServer::start().await;
        mount_me(&server, "Acme").await;

        let err = client(&server, Some("tw-token"))
            .verify_handle("acme")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProviderError::ClaimMismatch {
                claimed: "acme".to_string(),
                actual: "Acme".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_missing_token_skips_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(&server, None).verify_handle("acme").await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::AuthMissing {
                provider: "Twitter"
            }
        );
    }

    #[tokio::test]
    async fn test_expired_token_reports_auth_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2/users/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client(&server, Some("tw-token"))
            .verify_handle("acme")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::AuthMissing { .. }));
    }

    #[tokio::test]
    async fn test_too_many_requests_reports_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2/users/me"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = client(&server, Some("tw-token"))
            .verify_handle("acme")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProviderError::RateLimited {
                provider: "Twitter"
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_transient() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/2/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client(&server, Some("tw-token"))
            .verify_handle("acme")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Transient(_)));
    }
}
