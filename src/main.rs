//! techstack - GitHub tech-stack analyzer
//!
//! Main entry point for the techstack CLI.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use techstack::analysis::{self, formatted_tech_stack, rules};
use techstack::commands::{Cli, Commands};
use techstack::config::{validate_config_result, TechStackConfig};
use techstack::report::{render_report, render_stack};
use techstack::style;

fn main() {
    if let Err(e) = techstack::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> techstack::Result<()> {
    match cli.command {
        Commands::Init { force } => handle_init_command(&cli.config, force),
        Commands::Rules => {
            print!("{}", render_rules());
            Ok(())
        }
        Commands::Analyze {
            username,
            token,
            json,
            top,
        } => {
            let config = load_config(&cli.config)?;
            let username = config.resolve_username(username.as_deref())?;
            let token = config.resolve_token(token.as_deref());
            tracing::info!(
                username = %username,
                authenticated = token.is_some(),
                "Starting analysis"
            );

            let aggregator = analysis::github_aggregator(&config, token.as_deref())?;
            let runtime = tokio::runtime::Runtime::new()?;
            let report = runtime.block_on(aggregator.analyze(&username))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_report(&report, top));
            }
            Ok(())
        }
        Commands::Stack {
            username,
            token,
            json,
            fallback,
        } => {
            let config = load_config(&cli.config)?;
            let username = config.resolve_username(username.as_deref())?;
            let token = config.resolve_token(token.as_deref());

            let aggregator = analysis::github_aggregator(&config, token.as_deref())?;
            let runtime = tokio::runtime::Runtime::new()?;
            let stack = match runtime.block_on(aggregator.analyze_tech_stack(&username)) {
                Ok(result) => formatted_tech_stack(&result),
                Err(e) if fallback => {
                    tracing::warn!(username = %username, error = %e, "Analysis failed, using fallback stack");
                    eprintln!(
                        "{} {}",
                        style::warning("Failed to analyze tech stack, showing fallback:"),
                        e
                    );
                    config.fallback_stack.clone()
                }
                Err(e) => return Err(e),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&stack)?);
            } else {
                print!("{}", render_stack(&stack));
            }
            Ok(())
        }
    }
}

/// Load the explicit config file, or the default one if present
fn load_config(config_path: &Option<String>) -> techstack::Result<TechStackConfig> {
    let config = match config_path {
        Some(path) => TechStackConfig::load(path)?,
        None => TechStackConfig::load_or_default()?,
    };
    validate_config_result(&config)?;
    Ok(config)
}

fn handle_init_command(config_path: &Option<String>, force: bool) -> techstack::Result<()> {
    let path = config_path
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(TechStackConfig::default_path);

    if path.exists() && !force {
        return Err(techstack::TechStackError::Config(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    TechStackConfig::new().save(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn render_rules() -> String {
    let mut out = String::new();
    for rule in rules::RULES {
        let language = match rule.language {
            rules::LanguageMatch::Any => "any language".to_string(),
            rules::LanguageMatch::OneOf(languages) => languages.join(" | "),
        };
        let text = match rule.text {
            rules::TextMatch::Always => "always".to_string(),
            rules::TextMatch::Name(k) => format!("name contains {}", k.join(" | ")),
            rules::TextMatch::Description(k) => format!("description contains {}", k.join(" | ")),
            rules::TextMatch::NameOrDescription(k) => {
                format!("name/description contains {}", k.join(" | "))
            }
        };
        let effects: Vec<String> = rule
            .effects
            .iter()
            .map(|effect| match effect {
                rules::Effect::Framework(f) => format!("framework {}", f),
                rules::Effect::Technology(t) => format!("technology {}", t),
                rules::Effect::LanguageAsTechnology => "language as technology".to_string(),
            })
            .collect();
        out.push_str(&format!(
            "{} [{}] {} -> {}\n",
            style::header(&format!("{:<24}", rule.name)),
            language,
            text,
            effects.join(", ")
        ));
    }
    out
}
