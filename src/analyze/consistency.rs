use crate::clock::updated_within;
use crate::types::profile::ProfileRecord;
use crate::types::scoring::Score;
use chrono::{DateTime, Utc};

pub const DEFAULT_CONSISTENCY_DAYS: u32 = 365;

/// Share of repositories touched inside the window, boosted by 1.5. Missing
/// or unparseable timestamps count toward the total but never as recent.
pub fn consistency_score(profile: &ProfileRecord, now: DateTime<Utc>, window_days: u32) -> Score {
    let total = profile.repositories.len();
    if total == 0 {
        return 0.0;
    }

    let recent = profile
        .repositories
        .iter()
        .filter(|repo| updated_within(repo.updated_at.as_deref(), now, window_days))
        .count();
    (1.5 * recent as f64 / total as f64).clamp(0.0, 1.0)
}
