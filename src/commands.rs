//! CLI command definitions
//!
//! All CLI structs and subcommand enums are defined here.

use clap::{Parser, Subcommand};

/// techstack - Infer a developer's tech stack from their GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "techstack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.config/techstack/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a user's repositories and show the full breakdown
    Analyze {
        /// GitHub username (default: default_username from config)
        username: Option<String>,

        /// Personal access token (default: $GITHUB_TOKEN)
        #[arg(short, long)]
        token: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Number of languages to list
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Print the formatted tech stack (at most 12 entries)
    Stack {
        /// GitHub username (default: default_username from config)
        username: Option<String>,

        /// Personal access token (default: $GITHUB_TOKEN)
        #[arg(short, long)]
        token: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Print the configured fallback stack if analysis fails
        #[arg(long)]
        fallback: bool,
    },

    /// List the heuristic rules used for inference
    Rules,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
