use crate::types::profile::ProfileRecord;
use crate::types::scoring::Score;

/// Exact, case-sensitive names counted as mainstream.
pub const POPULAR_LANGUAGES: [&str; 8] = [
    "Python",
    "JavaScript",
    "TypeScript",
    "Go",
    "Rust",
    "Java",
    "C++",
    "C#",
];

pub fn code_quality_score(profile: &ProfileRecord) -> Score {
    let diversity = (profile.languages.len() as f64 / 5.0).min(1.0);
    let popular = profile
        .languages
        .iter()
        .filter(|usage| POPULAR_LANGUAGES.contains(&usage.name()))
        .count();
    let popular_score = (popular as f64 / 3.0).min(1.0);
    (0.7 * diversity + 0.3 * popular_score).clamp(0.0, 1.0)
}
