use crate::types::profile::ProfileRecord;
use crate::types::scoring::Score;

pub fn collaboration_score(profile: &ProfileRecord) -> Score {
    let total = profile.repositories.len();
    if total == 0 {
        return 0.0;
    }

    let forks = profile
        .repositories
        .iter()
        .filter(|repo| repo.is_fork)
        .count();
    let originality = 1.0 - forks as f64 / total as f64;

    let account = &profile.account;
    let social = if account.following == 0 {
        0.0
    } else {
        (account.followers as f64 / account.following as f64).min(1.0)
    };

    (0.7 * originality + 0.3 * social).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::{profile_with_repos, repos};

    #[test]
    fn no_repositories_short_circuits_to_zero() {
        let mut profile = ProfileRecord::default();
        profile.account.followers = 500;
        profile.account.following = 1;
        assert_eq!(collaboration_score(&profile), 0.0);
    }

    #[test]
    fn single_fork_has_no_originality() {
        let mut profile = profile_with_repos(repos(1, true, None));
        profile.account.followers = 10;
        profile.account.following = 10;
        assert!((collaboration_score(&profile) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn zero_following_drops_social_term() {
        let mut profile = profile_with_repos(repos(4, false, None));
        profile.account.followers = 1_000;
        assert!((collaboration_score(&profile) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn mixed_forks_and_partial_social_ratio() {
        let mut all = repos(2, false, None);
        all.extend(repos(2, true, None));
        let mut profile = profile_with_repos(all);
        profile.account.followers = 1;
        profile.account.following = 4;
        assert!((collaboration_score(&profile) - 0.425).abs() < 1e-9);
    }
}
