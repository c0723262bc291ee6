//! techstack configuration file handling
//!
//! Loads and manages ~/.config/techstack/config.yaml. Every field has a
//! default, so a missing file is never needed to run an analysis.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    format!("techstack/{}", env!("CARGO_PKG_VERSION"))
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_max_concurrent_requests() -> usize {
    8
}

/// Shown by `techstack stack --fallback` when the analysis cannot run
fn default_fallback_stack() -> Vec<String> {
    [
        "TypeScript",
        "JavaScript",
        "Python",
        "React",
        "Next.js",
        "Unity",
        "PyTorch",
        "React Native",
        "Machine Learning",
        "Game Development",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// techstack configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechStackConfig {
    /// GitHub REST base URL (GitHub Enterprise: https://host/api/v3)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// User-Agent header; GitHub rejects requests without one
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Environment variable holding a personal access token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Language lookups in flight at once
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Username analyzed when none is given on the command line
    #[serde(default)]
    pub default_username: Option<String>,

    /// Stack shown when analysis fails
    #[serde(default = "default_fallback_stack")]
    pub fallback_stack: Vec<String>,
}

impl TechStackConfig {
    /// Create a configuration with every field at its default
    pub fn new() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            token_env: default_token_env(),
            request_timeout_secs: default_request_timeout_secs(),
            max_concurrent_requests: default_max_concurrent_requests(),
            default_username: None,
            fallback_stack: default_fallback_stack(),
        }
    }

    /// Load configuration from the default path, falling back to defaults when absent
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::new())
        }
    }

    /// Load configuration from a specific path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(crate::TechStackError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), "Loading techstack configuration");

        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;

        tracing::debug!(
            api_url = %config.api_url,
            timeout_secs = config.request_timeout_secs,
            max_concurrent = config.max_concurrent_requests,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        tracing::info!(path = %path.display(), "Saving techstack configuration");

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;

        Ok(())
    }

    /// Get the default config path (~/.config/techstack/config.yaml)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(".config");
        path.push("techstack");
        path.push("config.yaml");
        path
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Pick the token to authenticate with
    ///
    /// An explicit token wins over the configured environment variable.
    /// Blank values count as absent.
    pub fn resolve_token(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| std::env::var(&self.token_env).ok())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Pick the username to analyze
    pub fn resolve_username(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.default_username.clone())
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                crate::TechStackError::Config(
                    "No GitHub username given and no default_username configured".to_string(),
                )
            })
    }
}

impl Default for TechStackConfig {
    fn default() -> Self {
        Self::new()
    }
}
