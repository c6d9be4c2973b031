//! Keyword tagging of a profile's repositories into coarse focus areas.

use crate::types::config::FocusConfig;
use crate::types::profile::RepositoryText;
use tracing::debug;

pub const DEFAULT_MAX_AREAS: usize = 5;

const BUILTIN_CATEGORIES: [(&str, &[&str]); 9] = [
    (
        "web",
        &[
            "web", "frontend", "backend", "api", "rest", "http", "flask", "django", "react",
            "vue", "angular",
        ],
    ),
    (
        "data",
        &[
            "data",
            "analytics",
            "machine learning",
            "ml",
            "ai",
            "statistics",
            "pandas",
            "numpy",
            "tensorflow",
            "pytorch",
        ],
    ),
    (
        "devops",
        &[
            "docker",
            "kubernetes",
            "ci/cd",
            "deployment",
            "cloud",
            "aws",
            "gcp",
            "azure",
            "terraform",
            "ansible",
        ],
    ),
    (
        "security",
        &[
            "security",
            "auth",
            "encryption",
            "privacy",
            "penetration",
            "hacking",
            "cybersecurity",
        ],
    ),
    (
        "mobile",
        &[
            "android",
            "ios",
            "mobile",
            "react native",
            "flutter",
            "swift",
            "kotlin",
        ],
    ),
    (
        "gaming",
        &["game", "gaming", "unity", "unreal", "godot", "phaser"],
    ),
    (
        "finance",
        &[
            "trading",
            "finance",
            "stock",
            "crypto",
            "blockchain",
            "bitcoin",
            "ethereum",
        ],
    ),
    (
        "iot",
        &[
            "iot",
            "internet of things",
            "arduino",
            "raspberry pi",
            "embedded",
        ],
    ),
    (
        "automation",
        &["automation", "scripting", "bash", "powershell", "selenium"],
    ),
];

#[derive(Debug, Clone, PartialEq)]
pub struct FocusCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Immutable keyword table plus the truncation limit. Categories are tested
/// in table order, which is also the output order.
#[derive(Debug, Clone)]
pub struct FocusClassifier {
    categories: Vec<FocusCategory>,
    max_areas: usize,
}

impl Default for FocusClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FocusClassifier {
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|(name, keywords)| FocusCategory {
                name: (*name).to_string(),
                keywords: keywords.iter().map(|keyword| (*keyword).to_string()).collect(),
            })
            .collect();
        Self {
            categories,
            max_areas: DEFAULT_MAX_AREAS,
        }
    }

    /// Built-in table extended by config: extra keywords join an existing
    /// category, or append a new one after the built-ins.
    pub fn from_config(config: Option<&FocusConfig>) -> Self {
        let mut classifier = Self::builtin();
        let Some(config) = config else {
            return classifier;
        };

        if let Some(max_areas) = config.max_areas {
            classifier.max_areas = max_areas;
        }
        for (name, keywords) in &config.extra_keywords {
            let keywords = keywords
                .iter()
                .map(|keyword| keyword.trim().to_lowercase())
                .filter(|keyword| !keyword.is_empty());
            match classifier
                .categories
                .iter_mut()
                .find(|category| &category.name == name)
            {
                Some(category) => category.keywords.extend(keywords),
                None => classifier.categories.push(FocusCategory {
                    name: name.clone(),
                    keywords: keywords.collect(),
                }),
            }
        }
        classifier
    }

    pub fn categories(&self) -> &[FocusCategory] {
        &self.categories
    }

    pub fn max_areas(&self) -> usize {
        self.max_areas
    }

    pub fn classify<R: RepositoryText>(&self, repositories: &[R]) -> Vec<String> {
        let text = corpus(repositories);
        if text.is_empty() {
            return Vec::new();
        }

        let areas = self
            .categories
            .iter()
            .filter(|category| {
                category
                    .keywords
                    .iter()
                    .any(|keyword| text.contains(keyword.as_str()))
            })
            .map(|category| category.name.clone())
            .take(self.max_areas)
            .collect::<Vec<_>>();
        debug!(areas = ?areas, repositories = repositories.len(), "classified focus areas");
        areas
    }
}

/// Non-empty descriptions followed by every name, space-joined and lower-cased.
fn corpus<R: RepositoryText>(repositories: &[R]) -> String {
    let descriptions = repositories
        .iter()
        .filter_map(|repo| repo.description())
        .filter(|description| !description.is_empty());
    let names = repositories.iter().map(|repo| repo.name());
    descriptions
        .chain(names)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
