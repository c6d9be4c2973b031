use crate::types::profile::ProfileRecord;
use crate::types::scoring::Score;

/// Average stars per repository, saturating at ten.
pub fn impact_score(profile: &ProfileRecord) -> Score {
    let total = profile.repositories.len();
    if total == 0 {
        return 0.0;
    }
    let average = profile.total_stars_received as f64 / total as f64;
    (average / 10.0).clamp(0.0, 1.0)
}
