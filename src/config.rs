//! Configuration handling for the TUI

use crate::providers::{DEFAULT_GITHUB_API, DEFAULT_TWITTER_API};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default provider request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct VerifyConfig {
    /// GitHub REST API base URL
    pub github_api_url: Option<String>,
    /// Optional GitHub token, raises the anonymous rate limit
    pub github_token: Option<String>,
    /// Twitter API base URL
    pub twitter_api_url: Option<String>,
    /// OAuth 2.0 user access token of the connected Twitter account
    pub twitter_access_token: Option<String>,
    /// Provider request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl VerifyConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "grants", "grant-verify-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: VerifyConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Override fields from `GRANT_VERIFY_*` variables
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("GRANT_VERIFY_GITHUB_API") {
            self.github_api_url = Some(v);
        }
        if let Some(v) = var("GRANT_VERIFY_GITHUB_TOKEN") {
            self.github_token = Some(v);
        }
        if let Some(v) = var("GRANT_VERIFY_TWITTER_API") {
            self.twitter_api_url = Some(v);
        }
        if let Some(v) = var("GRANT_VERIFY_TWITTER_TOKEN") {
            self.twitter_access_token = Some(v);
        }
        if let Some(secs) = var("GRANT_VERIFY_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.request_timeout_secs = Some(secs);
        }
    }

    pub fn github_api_url(&self) -> &str {
        self.github_api_url.as_deref().unwrap_or(DEFAULT_GITHUB_API)
    }

    pub fn twitter_api_url(&self) -> &str {
        self.twitter_api_url.as_deref().unwrap_or(DEFAULT_TWITTER_API)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Directory submitted applications are written to
    pub fn submissions_dir() -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("submissions"))
            .unwrap_or_else(|| PathBuf::from("submissions"))
    }

    /// Log file location; the terminal itself is owned by the UI
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("grant-verify-tui.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = VerifyConfig::default();
        assert!(config.github_api_url.is_none());
        assert!(config.twitter_access_token.is_none());
        assert_eq!(config.github_api_url(), "https://api.github.com");
        assert_eq!(config.twitter_api_url(), "https://api.twitter.com");
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_serialization() {
        let config = VerifyConfig {
            github_api_url: Some("http://localhost:9000".to_string()),
            github_token: None,
            twitter_api_url: Some("http://localhost:9001".to_string()),
            twitter_access_token: Some("token".to_string()),
            request_timeout_secs: Some(3),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: VerifyConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
        assert_eq!(parsed.github_api_url(), "http://localhost:9000");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: VerifyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, VerifyConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"github_api_url": "http://gh", "unknown_field": "value"}"#;
        let parsed: VerifyConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.github_api_url(), "http://gh");
    }

    #[test]
    fn test_env_overrides_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("GRANT_VERIFY_TWITTER_TOKEN", "env-token"),
            ("GRANT_VERIFY_GITHUB_API", "http://env-gh"),
            ("GRANT_VERIFY_TIMEOUT_SECS", "7"),
        ]);
        let mut config = VerifyConfig {
            github_api_url: Some("http://file-gh".to_string()),
            twitter_api_url: Some("http://file-tw".to_string()),
            ..Default::default()
        };

        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.twitter_access_token.as_deref(), Some("env-token"));
        assert_eq!(config.github_api_url(), "http://env-gh");
        assert_eq!(config.twitter_api_url(), "http://file-tw");
        assert_eq!(config.request_timeout(), Duration::from_secs(7));
    }

    #[test]
    fn test_unparseable_timeout_is_ignored() {
        let mut config = VerifyConfig::default();
        config.apply_env(|key| (key == "GRANT_VERIFY_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_submissions_dir_is_named() {
        assert!(VerifyConfig::submissions_dir().ends_with("submissions"));
    }
}
