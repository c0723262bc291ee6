//! GitHub access
//!
//! The analyzer only needs two reads: a user's repository listing and each
//! repository's language breakdown. [`RepositorySource`] is that seam;
//! [`GitHubClient`] is the HTTP implementation.

mod client;
mod models;

pub use client::{GitHubClient, REPOS_PER_PAGE};
pub use models::{LanguageBreakdown, Repository};

use crate::Result;
use async_trait::async_trait;

/// Where repositories and their language breakdowns come from
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// First page of the user's repositories, most recently updated first
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>>;

    /// Language name to bytes for the repository behind `languages_url`
    async fn language_breakdown(&self, languages_url: &str) -> Result<LanguageBreakdown>;
}
