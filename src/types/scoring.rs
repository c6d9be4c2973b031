use crate::error::{DevMeterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = f64;

pub const CATEGORY_NAMES: [&str; 6] = [
    "activity_level",
    "code_quality",
    "collaboration",
    "consistency",
    "expertise",
    "impact",
];

const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// The six normalized sub-scores, each in `[0, 1]`. Field order is the
/// serialized key order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub activity_level: Score,
    pub code_quality: Score,
    pub collaboration: Score,
    pub consistency: Score,
    pub expertise: Score,
    pub impact: Score,
}

impl CategoryScores {
    #[cfg(test)]
    pub fn uniform(value: Score) -> Self {
        Self {
            activity_level: value,
            code_quality: value,
            collaboration: value,
            consistency: value,
            expertise: value,
            impact: value,
        }
    }

    pub fn entries(&self) -> [(&'static str, Score); 6] {
        [
            (CATEGORY_NAMES[0], self.activity_level),
            (CATEGORY_NAMES[1], self.code_quality),
            (CATEGORY_NAMES[2], self.collaboration),
            (CATEGORY_NAMES[3], self.consistency),
            (CATEGORY_NAMES[4], self.expertise),
            (CATEGORY_NAMES[5], self.impact),
        ]
    }
}

/// Per-category weights. Only obtainable through [`Weights::new`] or
/// [`Weights::default`], so a value in hand always sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    activity_level: f64,
    code_quality: f64,
    collaboration: f64,
    consistency: f64,
    expertise: f64,
    impact: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            activity_level: 0.25,
            code_quality: 0.20,
            collaboration: 0.15,
            consistency: 0.15,
            expertise: 0.15,
            impact: 0.10,
        }
    }
}

impl Weights {
    pub fn new(values: [f64; 6]) -> Result<Self> {
        let [activity_level, code_quality, collaboration, consistency, expertise, impact] = values;
        let weights = Self {
            activity_level,
            code_quality,
            collaboration,
            consistency,
            expertise,
            impact,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn values(&self) -> [f64; 6] {
        [
            self.activity_level,
            self.code_quality,
            self.collaboration,
            self.consistency,
            self.expertise,
            self.impact,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.values().iter().sum()
    }

    fn validate(&self) -> Result<()> {
        for (name, weight) in CATEGORY_NAMES.iter().zip(self.values()) {
            if !(0.0..=1.0).contains(&weight) {
                return Err(DevMeterError::InvalidWeights(format!(
                    "{name} must be between 0.0 and 1.0 (found {weight})"
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DevMeterError::InvalidWeights(format!(
                "weights must sum to 1.0 (found {sum:.4})"
            )));
        }
        Ok(())
    }

    /// Weighted total, accumulated in category order.
    pub fn apply(&self, scores: &CategoryScores) -> f64 {
        scores
            .entries()
            .iter()
            .zip(self.values())
            .map(|((_, score), weight)| score * weight)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Mostly Rotten")]
    MostlyRotten,
    #[serde(rename = "Rotten")]
    Rotten,
    #[serde(rename = "Mixed")]
    Mixed,
    #[serde(rename = "Mostly Fresh")]
    MostlyFresh,
    #[serde(rename = "Fresh")]
    Fresh,
    #[serde(rename = "Certified Fresh")]
    CertifiedFresh,
}

impl Rating {
    pub fn label(self) -> &'static str {
        match self {
            Rating::CertifiedFresh => "Certified Fresh",
            Rating::Fresh => "Fresh",
            Rating::MostlyFresh => "Mostly Fresh",
            Rating::Mixed => "Mixed",
            Rating::Rotten => "Rotten",
            Rating::MostlyRotten => "Mostly Rotten",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong pass - major red flags present")]
    StrongPass,
    #[serde(rename = "Not recommended - significant concerns")]
    NotRecommended,
    #[serde(rename = "Consider with caution - may need mentoring")]
    ConsiderWithCaution,
    #[serde(rename = "Recommended with minor concerns")]
    RecommendedWithMinorConcerns,
    #[serde(rename = "Highly recommended - this developer shows strong potential")]
    HighlyRecommended,
}

impl Recommendation {
    pub fn text(self) -> &'static str {
        match self {
            Recommendation::HighlyRecommended => {
                "Highly recommended - this developer shows strong potential"
            }
            Recommendation::RecommendedWithMinorConcerns => "Recommended with minor concerns",
            Recommendation::ConsiderWithCaution => "Consider with caution - may need mentoring",
            Recommendation::NotRecommended => "Not recommended - significant concerns",
            Recommendation::StrongPass => "Strong pass - major red flags present",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub percentage: u8,
    pub rating: Rating,
    pub category_scores: CategoryScores,
    pub recommendation: Recommendation,
}
