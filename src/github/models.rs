//! GitHub REST payloads consumed by the analyzer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Repository entry from `GET /users/{username}/repos`
///
/// Only the fields the analysis reads; everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    /// Primary language as GitHub spells it ("C#", "TypeScript", ...)
    #[serde(default)]
    pub language: Option<String>,
    /// Opaque URL of the per-repository language breakdown
    pub languages_url: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Repository {
    /// Create a repository record with no language or description
    pub fn new(name: impl Into<String>, languages_url: impl Into<String>) -> Self {
        let name = name.into();
        let now = Utc::now();
        Self {
            html_url: format!("https://github.com/{}", name),
            name,
            language: None,
            languages_url: languages_url.into(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_html_url(mut self, html_url: impl Into<String>) -> Self {
        self.html_url = html_url.into();
        self
    }
}

/// Body of `GET {languages_url}`: language name to bytes of code
pub type LanguageBreakdown = HashMap<String, u64>;
