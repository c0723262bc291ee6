//! Language byte histogram

use crate::github::LanguageBreakdown;
use std::collections::HashMap;

/// Bytes of code per language, summed across repositories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageHistogram {
    bytes: HashMap<String, u64>,
}

impl LanguageHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add bytes to a language's running total
    pub fn add(&mut self, language: impl Into<String>, bytes: u64) {
        let total = self.bytes.entry(language.into()).or_insert(0);
        *total = total.saturating_add(bytes);
    }

    /// Add every entry of one repository's breakdown
    pub fn add_breakdown(&mut self, breakdown: &LanguageBreakdown) {
        for (language, bytes) in breakdown {
            self.add(language.as_str(), *bytes);
        }
    }

    /// Sum another histogram into this one
    pub fn merge(&mut self, other: LanguageHistogram) {
        for (language, bytes) in other.bytes {
            self.add(language, bytes);
        }
    }

    pub fn get(&self, language: &str) -> Option<u64> {
        self.bytes.get(language).copied()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.bytes.values().fold(0u64, |acc, b| acc.saturating_add(*b))
    }

    /// Languages by descending byte count, ties broken by name
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .bytes
            .iter()
            .map(|(language, bytes)| (language.clone(), *bytes))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

impl From<&LanguageBreakdown> for LanguageHistogram {
    fn from(breakdown: &LanguageBreakdown) -> Self {
        let mut histogram = Self::new();
        histogram.add_breakdown(breakdown);
        histogram
    }
}
