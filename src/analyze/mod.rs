pub mod activity;
pub mod collaboration;
pub mod consistency;
pub mod expertise;
pub mod impact;
pub mod quality;
pub mod rating;

use crate::clock::Clock;
use crate::error::Result;
use crate::types::config::DevMeterConfig;
use crate::types::profile::ProfileRecord;
use crate::types::scoring::{CategoryScores, ScoreResult, Weights};
use std::sync::Arc;
use tracing::{debug, info};

/// Stateless scoring engine. Weights, window and clock are fixed at
/// construction; `score` only reads them, so one engine can be shared across
/// threads.
#[derive(Clone)]
pub struct Engine {
    weights: Weights,
    consistency_days: u32,
    clock: Arc<dyn Clock>,
}

impl Engine {
    pub fn new(weights: Weights, clock: Arc<dyn Clock>) -> Self {
        Self {
            weights,
            consistency_days: consistency::DEFAULT_CONSISTENCY_DAYS,
            clock,
        }
    }

    pub fn from_config(config: &DevMeterConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let engine = Self::new(config.weights()?, clock)
            .with_consistency_days(config.windows().consistency_days);
        Ok(engine)
    }

    pub fn with_consistency_days(mut self, days: u32) -> Self {
        self.consistency_days = days;
        self
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn category_scores(&self, profile: &ProfileRecord) -> CategoryScores {
        let now = self.clock.now();
        let scores = CategoryScores {
            activity_level: activity::activity_score(profile),
            code_quality: quality::code_quality_score(profile),
            collaboration: collaboration::collaboration_score(profile),
            consistency: consistency::consistency_score(profile, now, self.consistency_days),
            expertise: expertise::expertise_score(profile),
            impact: impact::impact_score(profile),
        };
        debug!(?scores, %now, "computed category scores");
        scores
    }

    pub fn score(&self, profile: &ProfileRecord) -> ScoreResult {
        let result = rating::aggregate(self.category_scores(profile), &self.weights);
        info!(
            percentage = result.percentage,
            rating = %result.rating,
            repositories = profile.repositories.len(),
            "profile scored"
        );
        result
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::types::scoring::{Rating, Recommendation};
    use chrono::{TimeZone, Utc};

    fn engine() -> Engine {
        Engine::new(Weights::default(), Arc::new(fixed_clock()))
    }

    fn strong_profile() -> ProfileRecord {
        let mut profile = profile_with_repos(repos(20, false, Some("2025-05-01T00:00:00Z")));
        profile.recent_activity = 10;
        profile.languages = languages(&["Rust", "Go", "Python", "TypeScript", "Java"]);
        profile.focus_areas = vec!["web".into(), "data".into(), "devops".into()];
        profile.account.followers = 50;
        profile.account.following = 50;
        profile.total_stars_received = 200;
        profile
    }

    #[test]
    fn strong_profile_is_certified_fresh() {
        let result = engine().score(&strong_profile());
        assert!(result.percentage >= 90);
        assert_eq!(result.rating, Rating::CertifiedFresh);
        assert_eq!(result.recommendation, Recommendation::HighlyRecommended);
    }

    #[test]
    fn zero_repositories_keep_only_language_and_focus_terms() {
        let profile = ProfileRecord {
            languages: languages(&["Rust", "Go"]),
            focus_areas: vec!["web".into(), "data".into(), "devops".into()],
            ..ProfileRecord::default()
        };

        let result = engine().score(&profile);
        let scores = result.category_scores;
        assert_eq!(scores.activity_level, 0.0);
        assert_eq!(scores.collaboration, 0.0);
        assert_eq!(scores.consistency, 0.0);
        assert_eq!(scores.impact, 0.0);
        assert!((scores.code_quality - 0.48).abs() < 1e-9);
        assert!((scores.expertise - 0.8).abs() < 1e-9);
        assert_eq!(result.percentage, 21);
        assert_eq!(result.rating, Rating::MostlyRotten);
    }

    #[test]
    fn scoring_is_idempotent_with_a_pinned_clock() {
        let engine = engine();
        let profile = strong_profile();
        assert_eq!(engine.score(&profile), engine.score(&profile));
    }

    #[test]
    fn stale_profile_loses_consistency_as_clock_advances() {
        let profile = strong_profile();
        let later = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        let engine = Engine::new(Weights::default(), Arc::new(crate::clock::FixedClock(later)));
        assert_eq!(engine.category_scores(&profile).consistency, 0.0);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();

        let engine = engine();
        let profile = strong_profile();
        let expected = engine.score(&profile);
        std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(|| engine.score(&profile)))
                .collect::<Vec<_>>();
            for handle in handles {
                assert_eq!(handle.join().expect("scoring thread should not panic"), expected);
            }
        });
    }

    #[test]
    fn huge_configured_window_does_not_overflow() {
        let config: DevMeterConfig = toml::from_str(
            r#"
[windows]
consistency_days = 4000000000
"#,
        )
        .expect("config should parse");
        assert!(config.validate().is_ok());

        let engine =
            Engine::from_config(&config, Arc::new(fixed_clock())).expect("engine should build");
        let mut profile = strong_profile();
        profile.repositories[0].updated_at = Some("1999-01-01T00:00:00Z".to_string());
        profile.repositories[1].updated_at = Some("unknown".to_string());
        assert_eq!(engine.category_scores(&profile).consistency, 1.0);
    }

    #[test]
    fn extreme_inputs_stay_in_range() {
        let engine = engine();
        let mut profiles = vec![ProfileRecord::default()];

        let mut huge = profile_with_repos(repos(30, true, Some("garbage")));
        huge.total_stars_received = u64::MAX;
        huge.recent_activity = u32::MAX;
        huge.account.followers = u64::MAX;
        huge.account.following = 1;
        profiles.push(huge);

        let mut lonely = profile_with_repos(repos(1, false, Some("2025-05-30T00:00:00Z")));
        lonely.account.following = 9_999;
        lonely.languages = languages(&["Rust"; 40]);
        lonely.focus_areas = vec!["web".into(); 12];
        profiles.push(lonely);

        for profile in &profiles {
            let result = engine.score(profile);
            for (name, value) in result.category_scores.entries() {
                assert!((0.0..=1.0).contains(&value), "{name} out of range: {value}");
            }
            assert!(result.percentage <= 100);
        }
    }

    #[test]
    fn engine_honors_configured_consistency_window() {
        let config: DevMeterConfig = toml::from_str(
            r#"
[windows]
consistency_days = 10
"#,
        )
        .expect("config should parse");
        let engine =
            Engine::from_config(&config, Arc::new(fixed_clock())).expect("engine should build");
        assert_eq!(engine.category_scores(&strong_profile()).consistency, 0.0);
    }

    #[test]
    fn engine_rejects_invalid_configured_weights() {
        let config: DevMeterConfig = toml::from_str(
            r#"
[weights]
impact = 0.9
"#,
        )
        .expect("config should parse");
        assert!(Engine::from_config(&config, Arc::new(fixed_clock())).is_err());
    }
}
