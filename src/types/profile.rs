use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account metadata. Only the social counters feed the score; every other
/// field the provider returns is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "fork")]
    pub is_fork: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, alias = "stargazers_count")]
    pub stars: u64,
}

/// `(language, repository count)` pair; serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageUsage(pub String, pub u32);

impl LanguageUsage {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> u32 {
        self.1
    }
}

/// Input record for the scoring engine. Built once by the caller and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, alias = "profile")]
    pub account: Account,
    #[serde(default)]
    pub repositories: Vec<RepositorySummary>,
    #[serde(default)]
    pub languages: Vec<LanguageUsage>,
    #[serde(default)]
    pub total_stars_received: u64,
    #[serde(default)]
    pub recent_activity: u32,
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

/// Raw repository as returned by the hosting provider, before aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, alias = "stargazers_count")]
    pub stars: u64,
    #[serde(default, alias = "forks_count")]
    pub forks: u64,
    #[serde(default, alias = "fork")]
    pub is_fork: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<&RepositorySnapshot> for RepositorySummary {
    fn from(repo: &RepositorySnapshot) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone(),
            is_fork: repo.is_fork,
            updated_at: repo.updated_at.clone(),
            language: repo.language.clone(),
            stars: repo.stars,
        }
    }
}

/// Account plus every repository fetched for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default, alias = "profile")]
    pub account: Account,
    #[serde(default)]
    pub repositories: Vec<RepositorySnapshot>,
}

/// Text the focus-area classifier reads from a repository.
pub trait RepositoryText {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
}

impl RepositoryText for RepositorySummary {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl RepositoryText for RepositorySnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
