//! Display helpers for analysis results

use super::result::TechStackResult;

/// Languages taken from the top of the ranking
pub const TOP_LANGUAGES: usize = 5;

/// Longest formatted stack
pub const MAX_STACK_ENTRIES: usize = 12;

/// Ranked display list for a result
///
/// Top languages first, then frameworks, then technologies. An entry is
/// skipped when something equal ignoring case is already listed, and the
/// list is cut at [`MAX_STACK_ENTRIES`].
pub fn formatted_tech_stack(result: &TechStackResult) -> Vec<String> {
    let mut stack: Vec<String> = Vec::new();

    let candidates = result
        .top_languages(TOP_LANGUAGES)
        .chain(result.frameworks().iter().map(String::as_str))
        .chain(result.technologies().iter().map(String::as_str));

    for candidate in candidates {
        if stack.len() == MAX_STACK_ENTRIES {
            break;
        }
        let lowered = candidate.to_lowercase();
        if !stack.iter().any(|existing| existing.to_lowercase() == lowered) {
            stack.push(candidate.to_string());
        }
    }

    stack
}

/// Human-readable size: "0 Bytes", "512 Bytes", "1.5 KB", "2.25 MB"
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

/// Share of `total` as a rounded whole percent
pub fn language_percentage(bytes: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    ((bytes as f64 / total as f64) * 100.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::histogram::LanguageHistogram;
    use crate::analysis::rules::Inference;

    fn result(
        languages: &[(&str, u64)],
        frameworks: &[&str],
        technologies: &[&str],
    ) -> TechStackResult {
        let mut histogram = LanguageHistogram::new();
        for (name, bytes) in languages {
            histogram.add(*name, *bytes);
        }
        let mut inference = Inference::new();
        inference
            .frameworks
            .extend(frameworks.iter().map(|s| s.to_string()));
        inference
            .technologies
            .extend(technologies.iter().map(|s| s.to_string()));
        TechStackResult::from_parts(&histogram, inference)
    }

    #[test]
    fn test_empty_result_formats_empty() {
        assert!(formatted_tech_stack(&TechStackResult::default()).is_empty());
    }

    #[test]
    fn test_order_languages_frameworks_technologies() {
        let stack = formatted_tech_stack(&result(
            &[("Python", 10), ("TypeScript", 20)],
            &["React"],
            &["Machine Learning", "Python", "TypeScript"],
        ));
        assert_eq!(
            stack,
            vec!["TypeScript", "Python", "React", "Machine Learning"]
        );
    }

    #[test]
    fn test_only_top_five_languages() {
        let stack = formatted_tech_stack(&result(
            &[
                ("A", 70),
                ("B", 60),
                ("C", 50),
                ("D", 40),
                ("E", 30),
                ("F", 20),
            ],
            &[],
            &[],
        ));
        assert_eq!(stack, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_case_insensitive_dedup() {
        let stack = formatted_tech_stack(&result(
            &[("Go", 10)],
            &[],
            &["GO", "go", "Rust"],
        ));
        assert_eq!(stack, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_truncated_to_twelve() {
        let frameworks = [
            "Angular", "Django", "Express.js", "Flask", "Next.js", "PyTorch", "React",
            "TensorFlow", "Unity", "Vue.js",
        ];
        let stack = formatted_tech_stack(&result(
            &[("C#", 5), ("JavaScript", 4), ("Python", 3), ("TypeScript", 2)],
            &frameworks,
            &["Game Development", "Machine Learning"],
        ));
        assert_eq!(stack.len(), MAX_STACK_ENTRIES);
        assert_eq!(stack[0], "C#");
        assert_eq!(stack[4], "Angular");
        assert_eq!(stack[11], "TensorFlow");

        let lowered: std::collections::HashSet<String> =
            stack.iter().map(|s| s.to_lowercase()).collect();
        assert_eq!(lowered.len(), stack.len());
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(512), "512 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_048_576), "1 MB");
        assert_eq!(format_bytes(2_359_296), "2.25 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }

    #[test]
    fn test_language_percentage() {
        assert_eq!(language_percentage(0, 0), 0);
        assert_eq!(language_percentage(1, 3), 33);
        assert_eq!(language_percentage(2, 3), 67);
        assert_eq!(language_percentage(50, 50), 100);
    }
}
