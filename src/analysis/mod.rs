//! Tech-stack analysis
//!
//! Turns a GitHub username into a ranked, deduplicated summary of the
//! languages, frameworks and technologies in their public repositories.
//!
//! # Pipeline
//!
//! 1. **List**: first page (100) of the user's repositories, most recently updated first
//! 2. **Lookup**: each repository's language breakdown, concurrently
//! 3. **Infer**: heuristic rules over name, description and primary language
//! 4. **Fold**: sum bytes per language, union frameworks and technologies
//! 5. **Format**: top languages, frameworks and technologies, at most 12 entries

mod aggregator;
mod format;
mod histogram;
mod result;
pub mod rules;

pub use aggregator::{fold_outcomes, RepositoryOutcome, TechStackAggregator, DEFAULT_MAX_CONCURRENT};
pub use format::{
    format_bytes, formatted_tech_stack, language_percentage, MAX_STACK_ENTRIES, TOP_LANGUAGES,
};
pub use histogram::LanguageHistogram;
pub use result::{AnalysisReport, LanguageStat, RepositorySummary, TechStackResult};
pub use rules::{infer_technologies, Inference};

use crate::config::TechStackConfig;
use crate::github::GitHubClient;
use crate::Result;

/// Build an aggregator backed by the GitHub API
pub fn github_aggregator(
    config: &TechStackConfig,
    token: Option<&str>,
) -> Result<TechStackAggregator<GitHubClient>> {
    let mut client = GitHubClient::new(config)?;
    if let Some(token) = token {
        client = client.with_token(token);
    }
    Ok(TechStackAggregator::new(client).with_max_concurrent(config.max_concurrent_requests))
}

/// Analyze a GitHub user's public repositories
pub async fn analyze_tech_stack(
    config: &TechStackConfig,
    username: &str,
    token: Option<&str>,
) -> Result<TechStackResult> {
    github_aggregator(config, token)?
        .analyze_tech_stack(username)
        .await
}

/// Analyze a GitHub user and return the formatted stack
pub async fn analyze_user_tech_stack(
    config: &TechStackConfig,
    username: &str,
    token: Option<&str>,
) -> Result<Vec<String>> {
    let result = analyze_tech_stack(config, username, token).await?;
    Ok(formatted_tech_stack(&result))
}
