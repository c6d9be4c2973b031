use crate::types::profile::ProfileRecord;
use crate::types::scoring::Score;

pub fn expertise_score(profile: &ProfileRecord) -> Score {
    let area_score = (profile.focus_areas.len() as f64 / 3.0).min(1.0);
    let depth_score = (profile.languages.len() as f64 / 4.0).min(1.0);
    (0.6 * area_score + 0.4 * depth_score).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::languages;

    #[test]
    fn nothing_scores_zero() {
        assert_eq!(expertise_score(&ProfileRecord::default()), 0.0);
    }

    #[test]
    fn areas_and_languages_saturate_independently() {
        let profile = ProfileRecord {
            focus_areas: vec!["web".into(), "data".into(), "devops".into(), "iot".into()],
            languages: languages(&["Rust", "Go"]),
            ..ProfileRecord::default()
        };
        assert!((expertise_score(&profile) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn scores_without_any_repositories() {
        let profile = ProfileRecord {
            focus_areas: vec!["web".into()],
            ..ProfileRecord::default()
        };
        assert!((expertise_score(&profile) - 0.2).abs() < 1e-9);
    }
}
