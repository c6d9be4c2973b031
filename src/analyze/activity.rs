use crate::types::profile::ProfileRecord;
use crate::types::scoring::Score;

pub fn activity_score(profile: &ProfileRecord) -> Score {
    let repo_score = (profile.repositories.len() as f64 / 20.0).min(1.0);
    let activity_bonus = (f64::from(profile.recent_activity) / 10.0).min(0.5);
    (repo_score + activity_bonus).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::{profile_with_repos, repos};

    #[test]
    fn empty_profile_scores_zero() {
        assert_eq!(activity_score(&ProfileRecord::default()), 0.0);
    }

    #[test]
    fn recent_activity_bonus_is_capped_at_half() {
        let mut profile = ProfileRecord::default();
        profile.recent_activity = 40;
        assert_eq!(activity_score(&profile), 0.5);
    }

    #[test]
    fn repository_term_saturates_at_twenty() {
        let mut profile = profile_with_repos(repos(30, false, None));
        profile.recent_activity = 10;
        assert_eq!(activity_score(&profile), 1.0);
    }

    #[test]
    fn ten_repos_and_two_recent() {
        let mut profile = profile_with_repos(repos(10, false, None));
        profile.recent_activity = 2;
        assert!((activity_score(&profile) - 0.7).abs() < 1e-9);
    }
}
