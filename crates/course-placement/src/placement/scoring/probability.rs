use serde::{Deserialize, Serialize};

use super::trend::Trend;

const MIN_PROBABILITY: i16 = 1;
const MAX_PROBABILITY: i16 = 99;

/// Lower bound of each `score - cutoff` band and the base probability it maps to.
/// Checked top to bottom; anything below the last bound falls through to `FLOOR_PROBABILITY`.
const PROBABILITY_BANDS: [(f64, i16); 7] = [
    (5.0, 95),
    (3.0, 85),
    (1.0, 70),
    (0.0, 55),
    (-1.0, 40),
    (-2.0, 25),
    (-3.0, 15),
];
const FLOOR_PROBABILITY: i16 = 5;

/// Probability (percent) of placement for a student with `student_score` cluster points on a
/// course whose latest cutoff is `cutoff`. Never reports 0 or 100.
pub fn estimate_probability(student_score: f64, cutoff: f64, trend: Trend) -> u8 {
    let diff = student_score - cutoff;

    let base = PROBABILITY_BANDS
        .iter()
        .find(|(lower, _)| diff >= *lower)
        .map(|(_, probability)| *probability)
        .unwrap_or(FLOOR_PROBABILITY);

    (base + trend.adjustment()).clamp(MIN_PROBABILITY, MAX_PROBABILITY) as u8
}

/// Coarse reading of a probability used when presenting results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityBand {
    High,
    Medium,
    Low,
}

impl ProbabilityBand {
    pub const fn from_probability(probability: u8) -> Self {
        if probability >= 70 {
            Self::High
        } else if probability >= 40 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}
