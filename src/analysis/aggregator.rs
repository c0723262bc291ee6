//! Tech-stack aggregator
//!
//! Lists a user's repositories, looks up each one's language breakdown with a
//! bounded number of requests in flight, and folds the per-repository
//! outcomes into a [`TechStackResult`].
//!
//! Each repository is analyzed independently into a [`RepositoryOutcome`];
//! merging happens afterwards in a single pass using only summation and set
//! union, so completion order never affects the result.

use super::histogram::LanguageHistogram;
use super::result::{AnalysisReport, RepositorySummary, TechStackResult};
use super::rules::{infer_technologies, Inference};
use crate::github::{LanguageBreakdown, Repository, RepositorySource};
use crate::Result;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

/// Default number of language lookups in flight
pub const DEFAULT_MAX_CONCURRENT: usize = 8;

/// What one repository contributed
#[derive(Debug, Clone)]
pub struct RepositoryOutcome {
    pub name: String,
    /// `None` when the breakdown lookup failed
    pub breakdown: Option<LanguageBreakdown>,
    pub inference: Inference,
}

/// Merge repository outcomes into a result plus the names of skipped repositories
///
/// Skipped names come back sorted.
pub fn fold_outcomes(
    outcomes: impl IntoIterator<Item = RepositoryOutcome>,
) -> (TechStackResult, Vec<String>) {
    let mut histogram = LanguageHistogram::new();
    let mut inference = Inference::new();
    let mut skipped = Vec::new();

    for outcome in outcomes {
        match outcome.breakdown {
            Some(ref breakdown) => histogram.add_breakdown(breakdown),
            None => skipped.push(outcome.name),
        }
        inference.merge(outcome.inference);
    }

    skipped.sort();
    (TechStackResult::from_parts(&histogram, inference), skipped)
}

/// Analyzes GitHub users against a [`RepositorySource`]
pub struct TechStackAggregator<S> {
    source: S,
    max_concurrent: usize,
}

impl<S: RepositorySource> TechStackAggregator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// Limit language lookups in flight (at least one)
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Analyze a user and keep the listing and skip details
    ///
    /// Fails only when the repository listing fails. A failed language
    /// lookup drops that repository's bytes but it still goes through
    /// technology inference.
    pub async fn analyze(&self, username: &str) -> Result<AnalysisReport> {
        let repos = self.source.list_repositories(username).await?;

        info!(
            username = %username,
            repositories = repos.len(),
            max_concurrent = self.max_concurrent,
            "Analyzing repositories"
        );

        let outcomes: Vec<RepositoryOutcome> = stream::iter(repos.iter())
            .map(|repo| self.analyze_repository(repo))
            .buffer_unordered(self.max_concurrent)
            .collect()
            .await;

        let (result, skipped) = fold_outcomes(outcomes);

        info!(
            username = %username,
            languages = result.languages().len(),
            frameworks = result.frameworks().len(),
            technologies = result.technologies().len(),
            skipped = skipped.len(),
            "Analysis complete"
        );

        Ok(AnalysisReport {
            username: username.to_string(),
            result,
            repositories: repos.iter().map(RepositorySummary::from).collect(),
            skipped,
        })
    }

    /// Analyze a user's tech stack
    pub async fn analyze_tech_stack(&self, username: &str) -> Result<TechStackResult> {
        Ok(self.analyze(username).await?.result)
    }

    async fn analyze_repository(&self, repo: &Repository) -> RepositoryOutcome {
        let inference = infer_technologies(repo);

        let breakdown = match self.source.language_breakdown(&repo.languages_url).await {
            Ok(breakdown) => {
                debug!(repo = %repo.name, languages = breakdown.len(), "Language breakdown fetched");
                Some(breakdown)
            }
            Err(e) => {
                warn!(repo = %repo.name, error = %e, "Failed to fetch language breakdown, skipping its bytes");
                None
            }
        };

        RepositoryOutcome {
            name: repo.name.clone(),
            breakdown,
            inference,
        }
    }
}
