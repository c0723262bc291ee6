//! Heuristic technology inference
//!
//! Guesses frameworks and technologies from a repository's name, description
//! and primary language. This is plain substring matching, not manifest
//! parsing: false positives ("next" in "nextcloud-theme") and misses are
//! expected.
//!
//! Every rule is one row in [`RULES`]: a gate on the primary language, a
//! test on the lowercased text, and the labels it adds. Rows are independent
//! and only ever add to the output sets.

use crate::github::Repository;
use std::collections::BTreeSet;

/// Languages reported as a technology in their own right
pub const PRIMARY_LANGUAGES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C#",
    "C++",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
];

/// Gate on the repository's primary language (exact GitHub spelling)
#[derive(Debug, Clone, Copy)]
pub enum LanguageMatch {
    Any,
    OneOf(&'static [&'static str]),
}

impl LanguageMatch {
    fn matches(&self, language: Option<&str>) -> bool {
        match self {
            LanguageMatch::Any => true,
            LanguageMatch::OneOf(languages) => {
                language.is_some_and(|lang| languages.iter().any(|l| *l == lang))
            }
        }
    }
}

/// Test on lowercased repository text; any listed keyword is enough
#[derive(Debug, Clone, Copy)]
pub enum TextMatch {
    Always,
    Name(&'static [&'static str]),
    Description(&'static [&'static str]),
    NameOrDescription(&'static [&'static str]),
}

impl TextMatch {
    fn matches(&self, text: &RepositoryText) -> bool {
        fn any_in(haystack: &str, needles: &[&str]) -> bool {
            needles.iter().any(|n| haystack.contains(n))
        }

        match self {
            TextMatch::Always => true,
            TextMatch::Name(keywords) => any_in(&text.name, keywords),
            TextMatch::Description(keywords) => any_in(&text.description, keywords),
            TextMatch::NameOrDescription(keywords) => {
                any_in(&text.name, keywords) || any_in(&text.description, keywords)
            }
        }
    }
}

/// What a matching rule adds
#[derive(Debug, Clone, Copy)]
pub enum Effect {
    Framework(&'static str),
    Technology(&'static str),
    /// The repository's primary language, verbatim, as a technology
    LanguageAsTechnology,
}

/// One row of the rule table
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub language: LanguageMatch,
    pub text: TextMatch,
    pub effects: &'static [Effect],
}

impl Rule {
    fn matches(&self, language: Option<&str>, text: &RepositoryText) -> bool {
        self.language.matches(language) && self.text.matches(text)
    }
}

const JS_TS: &[&str] = &["JavaScript", "TypeScript"];
const PYTHON: &[&str] = &["Python"];
const CSHARP: &[&str] = &["C#"];

/// The full rule table, evaluated top to bottom for every repository
pub const RULES: &[Rule] = &[
    Rule {
        name: "react",
        language: LanguageMatch::OneOf(JS_TS),
        text: TextMatch::NameOrDescription(&["react"]),
        effects: &[Effect::Framework("React")],
    },
    Rule {
        name: "nextjs",
        language: LanguageMatch::OneOf(JS_TS),
        text: TextMatch::NameOrDescription(&["next"]),
        effects: &[Effect::Framework("Next.js")],
    },
    Rule {
        name: "vue",
        language: LanguageMatch::OneOf(JS_TS),
        text: TextMatch::NameOrDescription(&["vue"]),
        effects: &[Effect::Framework("Vue.js")],
    },
    Rule {
        name: "angular",
        language: LanguageMatch::OneOf(JS_TS),
        text: TextMatch::NameOrDescription(&["angular"]),
        effects: &[Effect::Framework("Angular")],
    },
    Rule {
        name: "node",
        language: LanguageMatch::OneOf(JS_TS),
        text: TextMatch::NameOrDescription(&["node"]),
        effects: &[Effect::Technology("Node.js")],
    },
    Rule {
        name: "express",
        language: LanguageMatch::OneOf(JS_TS),
        text: TextMatch::NameOrDescription(&["express"]),
        effects: &[Effect::Framework("Express.js")],
    },
    Rule {
        name: "django",
        language: LanguageMatch::OneOf(PYTHON),
        text: TextMatch::NameOrDescription(&["django"]),
        effects: &[Effect::Framework("Django")],
    },
    Rule {
        name: "flask",
        language: LanguageMatch::OneOf(PYTHON),
        text: TextMatch::NameOrDescription(&["flask"]),
        effects: &[Effect::Framework("Flask")],
    },
    Rule {
        name: "pytorch",
        language: LanguageMatch::OneOf(PYTHON),
        text: TextMatch::NameOrDescription(&["pytorch"]),
        effects: &[Effect::Framework("PyTorch")],
    },
    Rule {
        name: "tensorflow",
        language: LanguageMatch::OneOf(PYTHON),
        text: TextMatch::NameOrDescription(&["tensorflow"]),
        effects: &[Effect::Framework("TensorFlow")],
    },
    Rule {
        name: "machine-learning",
        language: LanguageMatch::OneOf(PYTHON),
        text: TextMatch::Description(&["machine learning", "deep learning", "ml", "dl"]),
        effects: &[Effect::Technology("Machine Learning")],
    },
    Rule {
        name: "reinforcement-learning",
        language: LanguageMatch::OneOf(PYTHON),
        text: TextMatch::Description(&["reinforcement learning", "rl"]),
        effects: &[Effect::Technology("Reinforcement Learning")],
    },
    Rule {
        name: "unity",
        language: LanguageMatch::OneOf(CSHARP),
        text: TextMatch::NameOrDescription(&["unity"]),
        effects: &[Effect::Framework("Unity")],
    },
    Rule {
        name: "game-development",
        language: LanguageMatch::OneOf(CSHARP),
        text: TextMatch::NameOrDescription(&["game"]),
        effects: &[Effect::Technology("Game Development")],
    },
    Rule {
        name: "ios-swift",
        language: LanguageMatch::OneOf(&["Swift"]),
        text: TextMatch::Always,
        effects: &[Effect::Technology("iOS Development")],
    },
    Rule {
        name: "ios-name",
        language: LanguageMatch::Any,
        text: TextMatch::Name(&["ios"]),
        effects: &[Effect::Technology("iOS Development")],
    },
    Rule {
        name: "android-kotlin",
        language: LanguageMatch::OneOf(&["Kotlin"]),
        text: TextMatch::Always,
        effects: &[Effect::Technology("Android Development")],
    },
    Rule {
        name: "android-java",
        language: LanguageMatch::OneOf(&["Java"]),
        text: TextMatch::NameOrDescription(&["android"]),
        effects: &[Effect::Technology("Android Development")],
    },
    Rule {
        name: "react-native",
        language: LanguageMatch::Any,
        text: TextMatch::NameOrDescription(&["react native", "react-native"]),
        effects: &[
            Effect::Framework("React Native"),
            Effect::Technology("Mobile Development"),
        ],
    },
    Rule {
        name: "web",
        language: LanguageMatch::OneOf(&["HTML", "CSS"]),
        text: TextMatch::Always,
        effects: &[Effect::Technology("Web Development")],
    },
    Rule {
        name: "primary-language",
        language: LanguageMatch::OneOf(PRIMARY_LANGUAGES),
        text: TextMatch::Always,
        effects: &[Effect::LanguageAsTechnology],
    },
];

/// Lowercased text a rule is matched against
struct RepositoryText {
    name: String,
    description: String,
}

impl RepositoryText {
    fn from_repository(repo: &Repository) -> Self {
        Self {
            name: repo.name.to_lowercase(),
            description: repo
                .description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
        }
    }
}

/// Frameworks and technologies inferred so far
///
/// Both sets are ordered, so iteration is already alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inference {
    pub frameworks: BTreeSet<String>,
    pub technologies: BTreeSet<String>,
}

impl Inference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every rule against `repo`, adding whatever matches
    pub fn apply(&mut self, repo: &Repository) {
        let text = RepositoryText::from_repository(repo);
        let language = repo.language.as_deref();

        for rule in RULES.iter().filter(|r| r.matches(language, &text)) {
            tracing::trace!(repo = %repo.name, rule = rule.name, "Rule matched");
            for effect in rule.effects {
                match effect {
                    Effect::Framework(label) => {
                        self.frameworks.insert(label.to_string());
                    }
                    Effect::Technology(label) => {
                        self.technologies.insert(label.to_string());
                    }
                    Effect::LanguageAsTechnology => {
                        if let Some(lang) = language {
                            self.technologies.insert(lang.to_string());
                        }
                    }
                }
            }
        }
    }

    /// Union with another inference
    pub fn merge(&mut self, other: Inference) {
        self.frameworks.extend(other.frameworks);
        self.technologies.extend(other.technologies);
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty() && self.technologies.is_empty()
    }
}

/// Infer frameworks and technologies for a single repository
pub fn infer_technologies(repo: &Repository) -> Inference {
    let mut inference = Inference::new();
    inference.apply(repo);
    inference
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, language: Option<&str>, description: Option<&str>) -> Repository {
        let mut repo = Repository::new(name, format!("https://example.test/{}/languages", name));
        repo.language = language.map(str::to_string);
        repo.description = description.map(str::to_string);
        repo
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_python_deep_learning() {
        let inference = infer_technologies(&repo(
            "cool-project",
            Some("Python"),
            Some("My deep learning project"),
        ));
        assert!(inference.technologies.contains("Machine Learning"));
        assert!(inference.technologies.contains("Python"));
        assert!(inference.frameworks.is_empty());
    }

    #[test]
    fn test_typescript_next_app() {
        let inference = infer_technologies(&repo("my-next-app", Some("TypeScript"), None));
        assert!(inference.frameworks.contains("Next.js"));
        assert!(inference.technologies.contains("TypeScript"));
    }

    #[test]
    fn test_js_frameworks_are_language_gated() {
        let inference = infer_technologies(&repo("react-dashboard", Some("Python"), None));
        assert!(!inference.frameworks.contains("React"));
        assert_eq!(inference.technologies, set(&["Python"]));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let inference = infer_technologies(&repo(
            "Portfolio",
            Some("JavaScript"),
            Some("Built with VUE and Express"),
        ));
        assert_eq!(inference.frameworks, set(&["Express.js", "Vue.js"]));
    }

    #[test]
    fn test_node_is_a_technology() {
        let inference = infer_technologies(&repo("node-cli", Some("JavaScript"), None));
        assert!(inference.technologies.contains("Node.js"));
        assert!(!inference.frameworks.contains("Node.js"));
    }

    #[test]
    fn test_ml_keywords_only_read_description() {
        let inference = infer_technologies(&repo("ml-experiments", Some("Python"), None));
        assert!(!inference.technologies.contains("Machine Learning"));

        let inference = infer_technologies(&repo("agents", Some("Python"), Some("RL agents")));
        assert!(inference.technologies.contains("Reinforcement Learning"));
    }

    #[test]
    fn test_unity_game() {
        let inference = infer_technologies(&repo("unity-game", Some("C#"), None));
        assert_eq!(inference.frameworks, set(&["Unity"]));
        assert_eq!(inference.technologies, set(&["C#", "Game Development"]));
    }

    #[test]
    fn test_ios_by_language_or_name() {
        let swift = infer_technologies(&repo("weather", Some("Swift"), None));
        assert!(swift.technologies.contains("iOS Development"));

        let objc = infer_technologies(&repo("ios-widgets", Some("Objective-C"), None));
        assert_eq!(objc.technologies, set(&["iOS Development"]));

        let description_only =
            infer_technologies(&repo("widgets", Some("Objective-C"), Some("for ios")));
        assert!(description_only.technologies.is_empty());
    }

    #[test]
    fn test_android_rules() {
        let kotlin = infer_technologies(&repo("notes", Some("Kotlin"), None));
        assert_eq!(kotlin.technologies, set(&["Android Development", "Kotlin"]));

        let java_android =
            infer_technologies(&repo("notes", Some("Java"), Some("An Android notes app")));
        assert!(java_android.technologies.contains("Android Development"));

        let java_server = infer_technologies(&repo("spring-api", Some("Java"), None));
        assert_eq!(java_server.technologies, set(&["Java"]));
    }

    #[test]
    fn test_react_native_any_language() {
        let inference = infer_technologies(&repo("my-react-native-app", None, None));
        assert_eq!(inference.frameworks, set(&["React Native"]));
        assert_eq!(inference.technologies, set(&["Mobile Development"]));

        let from_description =
            infer_technologies(&repo("app", Some("TypeScript"), Some("React Native client")));
        assert!(from_description.frameworks.contains("React Native"));
        assert!(from_description.frameworks.contains("React"));
        assert!(from_description.technologies.contains("Mobile Development"));
    }

    #[test]
    fn test_web_development() {
        let html = infer_technologies(&repo("landing", Some("HTML"), None));
        assert_eq!(html.technologies, set(&["Web Development"]));
        assert!(html.frameworks.is_empty());
    }

    #[test]
    fn test_unlisted_language_not_a_technology() {
        let inference = infer_technologies(&repo("scripts", Some("Shell"), None));
        assert!(inference.is_empty());

        let none = infer_technologies(&repo("empty", None, None));
        assert!(none.is_empty());
    }

    #[test]
    fn test_language_gate_is_exact() {
        let inference = infer_technologies(&repo("react-app", Some("javascript"), None));
        assert!(inference.is_empty());
    }

    #[test]
    fn test_apply_accumulates_as_set() {
        let mut inference = Inference::new();
        inference.apply(&repo("react-app", Some("JavaScript"), None));
        inference.apply(&repo("react-app", Some("JavaScript"), None));
        assert_eq!(inference.frameworks, set(&["React"]));
        assert_eq!(inference.technologies, set(&["JavaScript"]));
    }

    #[test]
    fn test_merge_is_union() {
        let mut left = infer_technologies(&repo("django-blog", Some("Python"), None));
        let right = infer_technologies(&repo("unity-game", Some("C#"), None));
        left.merge(right);
        assert_eq!(left.frameworks, set(&["Django", "Unity"]));
        assert_eq!(left.technologies, set(&["C#", "Game Development", "Python"]));
    }

    #[test]
    fn test_rule_names_unique() {
        let names: BTreeSet<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), RULES.len());
    }
}
