//! GitHub REST client for the two endpoints the analyzer needs

use super::models::{LanguageBreakdown, Repository};
use super::RepositorySource;
use crate::config::TechStackConfig;
use crate::{Result, TechStackError};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Largest page GitHub serves; only one page is ever requested
pub const REPOS_PER_PAGE: u32 = 100;

/// GitHub API client
pub struct GitHubClient {
    client: Client,
    api_url: String,
    auth_token: Option<String>,
    timeout: Duration,
}

impl GitHubClient {
    /// Create a new client from configuration
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &TechStackConfig) -> Result<Self> {
        let user_agent = header::HeaderValue::from_str(&config.user_agent).map_err(|e| {
            TechStackError::Config(format!("Invalid user_agent {:?}: {}", config.user_agent, e))
        })?;

        let client = Client::builder()
            .default_headers({
                let mut headers = header::HeaderMap::new();
                headers.insert(header::USER_AGENT, user_agent);
                headers.insert(
                    header::ACCEPT,
                    header::HeaderValue::from_static("application/vnd.github.v3+json"),
                );
                headers
            })
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            auth_token: None,
            timeout: config.request_timeout(),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// URL of the most-recently-updated first page of a user's repositories
    pub fn repositories_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_url,
            urlencoding::encode(username),
            REPOS_PER_PAGE
        )
    }

    /// GET a URL and decode its JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut request = self.client.get(url).timeout(self.timeout);
        if let Some(ref token) = self.auth_token {
            request = request.header(header::AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(TechStackError::Upstream {
            status: status.as_u16(),
            message: status_message(status),
            body,
        })
    }

    /// List a user's public repositories, most recently updated first
    ///
    /// Only the first page of [`REPOS_PER_PAGE`] repositories is fetched.
    pub async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let username = username.trim();
        if username.is_empty() {
            return Err(TechStackError::Config(
                "GitHub username cannot be empty".to_string(),
            ));
        }

        let url = self.repositories_url(username);
        debug!(username = %username, url = %url, "Listing GitHub repositories");

        let repos: Vec<Repository> = self.get_json(&url).await?;

        info!(username = %username, count = repos.len(), "Fetched repository listing");
        Ok(repos)
    }

    /// Fetch one repository's language breakdown
    pub async fn get_language_breakdown(&self, languages_url: &str) -> Result<LanguageBreakdown> {
        debug!(url = %languages_url, "Fetching language breakdown");
        self.get_json(languages_url).await
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        GitHubClient::list_repositories(self, username).await
    }

    async fn language_breakdown(&self, languages_url: &str) -> Result<LanguageBreakdown> {
        self.get_language_breakdown(languages_url).await
    }
}

/// Human-readable explanation for a failed status
fn status_message(status: StatusCode) -> String {
    match status {
        StatusCode::FORBIDDEN => {
            "Rate limit exceeded. Provide a valid token or wait before retrying".to_string()
        }
        StatusCode::UNAUTHORIZED => "GitHub token is invalid or expired".to_string(),
        StatusCode::NOT_FOUND => "Repository or resource not found".to_string(),
        status => status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GitHubClient::new(&TechStackConfig::new()).expect("Failed to create client");
        assert_eq!(client.api_url(), "https://api.github.com");
        assert!(!client.is_authenticated());
        assert!(client.with_token("ghp_test").is_authenticated());
    }

    #[test]
    fn test_repositories_url() {
        let client = GitHubClient::new(&TechStackConfig::new()).unwrap();
        assert_eq!(
            client.repositories_url("octocat"),
            "https://api.github.com/users/octocat/repos?sort=updated&per_page=100"
        );
    }

    #[test]
    fn test_repositories_url_encodes_username() {
        let client = GitHubClient::new(&TechStackConfig::new()).unwrap();
        assert_eq!(
            client.repositories_url("a b/c"),
            "https://api.github.com/users/a%20b%2Fc/repos?sort=updated&per_page=100"
        );
    }

    #[test]
    fn test_enterprise_url_trailing_slash() {
        let mut config = TechStackConfig::new();
        config.api_url = "https://github.example.com/api/v3/".to_string();
        let client = GitHubClient::new(&config).unwrap();
        assert_eq!(client.api_url(), "https://github.example.com/api/v3");
    }

    #[test]
    fn test_invalid_user_agent() {
        let mut config = TechStackConfig::new();
        config.user_agent = "bad\nagent".to_string();
        assert!(GitHubClient::new(&config).is_err());
    }

    #[test]
    fn test_status_messages() {
        assert!(status_message(StatusCode::FORBIDDEN).contains("Rate limit"));
        assert!(status_message(StatusCode::UNAUTHORIZED).contains("invalid or expired"));
        assert!(status_message(StatusCode::NOT_FOUND).contains("not found"));
        assert_eq!(
            status_message(StatusCode::INTERNAL_SERVER_ERROR),
            "Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_empty_username_rejected_without_request() {
        let client = GitHubClient::new(&TechStackConfig::new()).unwrap();
        let err = client.list_repositories("  ").await.unwrap_err();
        assert!(matches!(err, TechStackError::Config(_)));
    }
}
