//! Error types for techstack
//!
//! Splits failures the way the analysis cares about them: the GitHub API
//! answering with a non-success status, the request never completing, and
//! everything local (config, files, parsing).

use thiserror::Error;

/// Result type alias for techstack operations
pub type Result<T> = std::result::Result<T, TechStackError>;

/// Error type for techstack operations
#[derive(Error, Debug)]
pub enum TechStackError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// GitHub answered with a non-2xx status
    #[error("GitHub API error: HTTP {status}: {message}")]
    Upstream {
        status: u16,
        message: String,
        body: String,
    },

    /// Transport failures (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl TechStackError {
    /// HTTP status carried by an upstream error
    pub fn status(&self) -> Option<u16> {
        match self {
            TechStackError::Upstream { status, .. } => Some(*status),
            TechStackError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, TechStackError::Upstream { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, TechStackError::Network(_))
    }
}
