//! Analysis output types

use super::histogram::LanguageHistogram;
use super::rules::Inference;
use crate::github::Repository;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One language and its aggregated size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStat {
    pub name: String,
    pub bytes: u64,
}

/// Result of a tech-stack analysis
///
/// `languages` is ordered by descending byte count; `frameworks` and
/// `technologies` are unique and alphabetical. Serializes with `languages`
/// as a JSON object whose key order is the ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechStackResult {
    #[serde(serialize_with = "serialize_languages")]
    languages: Vec<LanguageStat>,
    frameworks: Vec<String>,
    technologies: Vec<String>,
}

fn serialize_languages<S: Serializer>(
    languages: &[LanguageStat],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(languages.len()))?;
    for stat in languages {
        map.serialize_entry(&stat.name, &stat.bytes)?;
    }
    map.end()
}

impl TechStackResult {
    /// Build a result from the merged histogram and inferences
    pub fn from_parts(histogram: &LanguageHistogram, inference: Inference) -> Self {
        Self {
            languages: histogram
                .ranked()
                .into_iter()
                .map(|(name, bytes)| LanguageStat { name, bytes })
                .collect(),
            frameworks: inference.frameworks.into_iter().collect(),
            technologies: inference.technologies.into_iter().collect(),
        }
    }

    pub fn languages(&self) -> &[LanguageStat] {
        &self.languages
    }

    pub fn frameworks(&self) -> &[String] {
        &self.frameworks
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    /// Names of the `n` largest languages
    pub fn top_languages(&self, n: usize) -> impl Iterator<Item = &str> {
        self.languages.iter().take(n).map(|stat| stat.name.as_str())
    }

    pub fn language_bytes(&self, name: &str) -> Option<u64> {
        self.languages
            .iter()
            .find(|stat| stat.name == name)
            .map(|stat| stat.bytes)
    }

    pub fn total_bytes(&self) -> u64 {
        self.languages
            .iter()
            .fold(0u64, |acc, stat| acc.saturating_add(stat.bytes))
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.frameworks.is_empty() && self.technologies.is_empty()
    }

    /// Display list; see [`super::formatted_tech_stack`]
    pub fn formatted(&self) -> Vec<String> {
        super::format::formatted_tech_stack(self)
    }
}

/// Listing fields shown alongside a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    pub name: String,
    pub language: Option<String>,
    pub description: Option<String>,
    pub html_url: String,
}

impl From<&Repository> for RepositorySummary {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            language: repo.language.clone(),
            description: repo.description.clone(),
            html_url: repo.html_url.clone(),
        }
    }
}

/// Everything one analysis run produced
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub username: String,
    pub result: TechStackResult,
    /// Listing order (most recently updated first)
    pub repositories: Vec<RepositorySummary>,
    /// Repositories whose language breakdown could not be fetched
    pub skipped: Vec<String>,
}

impl AnalysisReport {
    pub fn total_bytes(&self) -> u64 {
        self.result.total_bytes()
    }

    /// True when the listing hit the single-page limit and more may exist
    pub fn may_be_truncated(&self) -> bool {
        self.repositories.len() >= crate::github::REPOS_PER_PAGE as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TechStackResult {
        let mut histogram = LanguageHistogram::new();
        histogram.add("Python", 300);
        histogram.add("TypeScript", 900);

        let mut inference = Inference::new();
        inference.frameworks.insert("React".to_string());
        inference.frameworks.insert("Django".to_string());
        inference.technologies.insert("Python".to_string());

        TechStackResult::from_parts(&histogram, inference)
    }

    #[test]
    fn test_from_parts_ordering() {
        let result = sample();
        let names: Vec<&str> = result.top_languages(5).collect();
        assert_eq!(names, vec!["TypeScript", "Python"]);
        assert_eq!(result.frameworks(), &["Django", "React"]);
        assert_eq!(result.technologies(), &["Python"]);
        assert_eq!(result.total_bytes(), 1200);
        assert_eq!(result.language_bytes("Python"), Some(300));
        assert_eq!(result.language_bytes("Go"), None);
    }

    #[test]
    fn test_json_keeps_language_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"languages":{"TypeScript":900,"Python":300},"frameworks":["Django","React"],"technologies":["Python"]}"#
        );
    }

    #[test]
    fn test_empty_result_json() {
        let result = TechStackResult::default();
        assert!(result.is_empty());
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"languages":{},"frameworks":[],"technologies":[]}"#
        );
    }

    #[test]
    fn test_repository_summary_from_repository() {
        let repo = Repository::new("dotfiles", "https://example.test/languages")
            .with_language("Shell")
            .with_html_url("https://github.com/octocat/dotfiles");
        let summary = RepositorySummary::from(&repo);
        assert_eq!(summary.name, "dotfiles");
        assert_eq!(summary.language.as_deref(), Some("Shell"));
        assert_eq!(summary.html_url, "https://github.com/octocat/dotfiles");
    }
}
