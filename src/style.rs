//! Terminal styling utilities
//!
//! Consistent color scheme for analysis output, using crossterm for
//! cross-platform terminal colors.

use crossterm::style::{StyledContent, Stylize};

/// Width of the language share bar in characters
pub const BAR_WIDTH: usize = 20;

/// Section header
pub fn header(text: &str) -> StyledContent<String> {
    text.to_string().cyan().bold()
}

/// Language share colors
/// - 50%+: Green
/// - 20%+: Yellow
/// - below: Dim
pub fn percentage_style(percent: u64) -> StyledContent<String> {
    let label = format!("{:>3}%", percent);
    match percent {
        50.. => label.green().bold(),
        20..=49 => label.yellow(),
        _ => label.dark_grey(),
    }
}

/// Proportional bar for a language share
pub fn share_bar(percent: u64) -> String {
    let filled = ((percent.min(100) as usize) * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Framework label
pub fn framework_style(name: &str) -> StyledContent<String> {
    name.to_string().magenta()
}

/// Technology label
pub fn technology_style(name: &str) -> StyledContent<String> {
    name.to_string().blue()
}

/// Secondary text (byte counts, URLs)
pub fn dim(text: &str) -> StyledContent<String> {
    text.to_string().dark_grey()
}

/// Warning marker for skipped repositories and truncation notes
pub fn warning(text: &str) -> StyledContent<String> {
    text.to_string().yellow()
}
