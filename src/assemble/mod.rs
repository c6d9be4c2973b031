//! Shapes a raw provider snapshot into the record the scoring engine reads.

use crate::classify::FocusClassifier;
use crate::clock::updated_within;
use crate::types::config::{DevMeterConfig, DEFAULT_MAX_REPOSITORIES};
use crate::types::profile::{LanguageUsage, ProfileRecord, ProfileSnapshot, RepositorySummary};
use chrono::{DateTime, Utc};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssembleOptions {
    pub max_repositories: usize,
    pub recent_activity_days: u32,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            max_repositories: DEFAULT_MAX_REPOSITORIES,
            recent_activity_days: 90,
        }
    }
}

impl AssembleOptions {
    pub fn from_config(config: &DevMeterConfig) -> Self {
        Self {
            max_repositories: config.max_repositories(),
            recent_activity_days: config.windows().recent_activity_days,
        }
    }
}

/// Stars are summed over the whole snapshot; every other aggregate only sees
/// the first `max_repositories` entries.
pub fn assemble(
    snapshot: &ProfileSnapshot,
    classifier: &FocusClassifier,
    now: DateTime<Utc>,
    options: &AssembleOptions,
) -> ProfileRecord {
    let kept = &snapshot.repositories[..snapshot.repositories.len().min(options.max_repositories)];

    let total_stars_received = snapshot
        .repositories
        .iter()
        .fold(0u64, |total, repo| total.saturating_add(repo.stars));
    let recent_activity = kept
        .iter()
        .filter(|repo| updated_within(repo.updated_at.as_deref(), now, options.recent_activity_days))
        .count() as u32;

    let record = ProfileRecord {
        account: snapshot.account.clone(),
        repositories: kept.iter().map(RepositorySummary::from).collect(),
        languages: language_usage(kept.iter().filter_map(|repo| repo.language.as_deref())),
        total_stars_received,
        recent_activity,
        focus_areas: classifier.classify(kept),
    };
    debug!(
        fetched = snapshot.repositories.len(),
        kept = record.repositories.len(),
        languages = record.languages.len(),
        recent_activity,
        "assembled profile record"
    );
    record
}

/// Per-language repository counts, most used first; ties keep first-seen order.
fn language_usage<'a>(languages: impl Iterator<Item = &'a str>) -> Vec<LanguageUsage> {
    let mut usage: Vec<LanguageUsage> = Vec::new();
    for language in languages.filter(|language| !language.is_empty()) {
        match usage.iter_mut().find(|entry| entry.name() == language) {
            Some(entry) => entry.1 += 1,
            None => usage.push(LanguageUsage(language.to_string(), 1)),
        }
    }
    usage.sort_by(|a, b| b.count().cmp(&a.count()));
    usage
}
