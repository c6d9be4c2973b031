use crate::types::scoring::{CategoryScores, Rating, Recommendation, ScoreResult, Weights};

/// Descending lower bounds; anything below the last is `MostlyRotten`.
const RATING_THRESHOLDS: [(u8, Rating); 5] = [
    (90, Rating::CertifiedFresh),
    (80, Rating::Fresh),
    (70, Rating::MostlyFresh),
    (60, Rating::Mixed),
    (50, Rating::Rotten),
];

/// Kept separate from the rating table; the two are not derived from each other.
const RECOMMENDATION_THRESHOLDS: [(u8, Recommendation); 4] = [
    (80, Recommendation::HighlyRecommended),
    (70, Recommendation::RecommendedWithMinorConcerns),
    (60, Recommendation::ConsiderWithCaution),
    (50, Recommendation::NotRecommended),
];

pub fn rating_for(percentage: u8) -> Rating {
    RATING_THRESHOLDS
        .iter()
        .find(|(floor, _)| percentage >= *floor)
        .map(|(_, rating)| *rating)
        .unwrap_or(Rating::MostlyRotten)
}

pub fn recommendation_for(percentage: u8) -> Recommendation {
    RECOMMENDATION_THRESHOLDS
        .iter()
        .find(|(floor, _)| percentage >= *floor)
        .map(|(_, recommendation)| *recommendation)
        .unwrap_or(Recommendation::StrongPass)
}

/// Weighted total scaled to a percentage, truncated toward zero and clamped.
pub fn percentage(scores: &CategoryScores, weights: &Weights) -> u8 {
    let total = weights.apply(scores) * 100.0;
    // `as` saturates and maps NaN to 0.
    (total.trunc() as i64).clamp(0, 100) as u8
}

pub fn aggregate(scores: CategoryScores, weights: &Weights) -> ScoreResult {
    let percentage = percentage(&scores, weights);
    ScoreResult {
        percentage,
        rating: rating_for(percentage),
        category_scores: scores,
        recommendation: recommendation_for(percentage),
    }
}
