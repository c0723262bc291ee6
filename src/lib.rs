//! techstack - GitHub tech-stack analyzer
//!
//! Lists a user's public GitHub repositories, sums their per-language byte
//! counts, and guesses frameworks and technologies from repository names,
//! descriptions and primary languages.
//!
//! # Architecture
//!
//! - **github**: REST client and the `RepositorySource` seam
//! - **analysis**: Rule table, histogram, aggregator and formatting
//! - **config**: YAML configuration and validation
//! - **report**: Terminal rendering of analysis output
//! - **commands**: CLI definitions

// Core modules
pub mod analysis;
pub mod config;
pub mod error;
pub mod github;

// Ambient
pub mod commands;
pub mod logging;
pub mod report;
pub mod style;

// Re-exports
pub use analysis::{analyze_tech_stack, analyze_user_tech_stack, TechStackAggregator, TechStackResult};
pub use error::{Result, TechStackError};
