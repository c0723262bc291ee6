//! Human-readable rendering of analysis output

use crate::analysis::{format_bytes, language_percentage, AnalysisReport};
use crate::style;
use std::fmt::Write;

/// Render a full report: languages, frameworks, technologies, repositories
///
/// `top` limits how many languages are listed.
pub fn render_report(report: &AnalysisReport, top: usize) -> String {
    let mut out = String::new();
    let result = &report.result;
    let total = report.total_bytes();

    let _ = writeln!(
        out,
        "{} {}",
        style::header("Tech stack for"),
        report.username
    );
    let _ = writeln!(
        out,
        "{}",
        style::dim(&format!(
            "{} repositories analyzed, {} of code",
            report.repositories.len(),
            format_bytes(total)
        ))
    );
    if report.may_be_truncated() {
        let _ = writeln!(
            out,
            "{}",
            style::warning("Only the 100 most recently updated repositories were analyzed")
        );
    }

    let _ = writeln!(out, "\n{}", style::header("Languages"));
    if result.languages().is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for stat in result.languages().iter().take(top) {
        let percent = language_percentage(stat.bytes, total);
        let _ = writeln!(
            out,
            "  {:<16} {} {} {}",
            stat.name,
            style::share_bar(percent),
            style::percentage_style(percent),
            style::dim(&format_bytes(stat.bytes))
        );
    }
    if result.languages().len() > top {
        let _ = writeln!(
            out,
            "  {}",
            style::dim(&format!("... and {} more", result.languages().len() - top))
        );
    }

    let _ = writeln!(out, "\n{}", style::header("Frameworks"));
    if result.frameworks().is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for framework in result.frameworks() {
        let _ = writeln!(out, "  {}", style::framework_style(framework));
    }

    let _ = writeln!(out, "\n{}", style::header("Technologies"));
    if result.technologies().is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for technology in result.technologies() {
        let _ = writeln!(out, "  {}", style::technology_style(technology));
    }

    let _ = writeln!(out, "\n{}", style::header("Repositories"));
    if report.repositories.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for repo in &report.repositories {
        let language = repo.language.as_deref().unwrap_or("-");
        let _ = write!(out, "  {:<32} {:<12}", repo.name, language);
        if let Some(ref description) = repo.description {
            let _ = write!(out, " {}", style::dim(description));
        }
        let _ = writeln!(out);
    }

    if !report.skipped.is_empty() {
        let _ = writeln!(
            out,
            "\n{} {}",
            style::warning("Language data unavailable for:"),
            report.skipped.join(", ")
        );
    }

    out
}

/// Render a formatted stack as one entry per line
pub fn render_stack(stack: &[String]) -> String {
    let mut out = String::new();
    for entry in stack {
        let _ = writeln!(out, "{}", entry);
    }
    out
}
