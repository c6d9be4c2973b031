use crate::types::profile::{Account, LanguageUsage, ProfileRecord};
use crate::types::scoring::ScoreResult;
use serde::Serialize;

/// Assembled profile summary plus its score, as printed by `analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub account: Account,
    pub repositories_considered: usize,
    pub languages: Vec<LanguageUsage>,
    pub focus_areas: Vec<String>,
    pub total_stars_received: u64,
    pub recent_activity: u32,
    pub devmeter: ScoreResult,
}

impl AnalysisReport {
    pub fn new(profile: ProfileRecord, devmeter: ScoreResult) -> Self {
        Self {
            repositories_considered: profile.repositories.len(),
            account: profile.account,
            languages: profile.languages,
            focus_areas: profile.focus_areas,
            total_stars_received: profile.total_stars_received,
            recent_activity: profile.recent_activity,
            devmeter,
        }
    }
}
