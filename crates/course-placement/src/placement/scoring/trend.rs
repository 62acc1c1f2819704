use serde::{Deserialize, Serialize};

use super::super::domain::CutoffHistory;

/// Average yearly cutoff movement beyond which a course counts as moving.
const TREND_THRESHOLD: f64 = 0.5;

/// Direction of a course's cutoff over the last three cycles. Rising means harder to enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Stable,
    Falling,
}

impl Trend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rising => "Rising",
            Self::Stable => "Stable",
            Self::Falling => "Falling",
        }
    }

    /// Probability points added for this trend.
    pub const fn adjustment(self) -> i16 {
        match self {
            Self::Rising => -5,
            Self::Stable => 0,
            Self::Falling => 5,
        }
    }
}

pub fn classify_trend(latest: f64, mid: f64, earliest: f64) -> Trend {
    let avg_change = ((latest - mid) + (mid - earliest)) / 2.0;

    if avg_change > TREND_THRESHOLD {
        Trend::Rising
    } else if avg_change < -TREND_THRESHOLD {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

impl CutoffHistory {
    pub fn trend(&self) -> Trend {
        classify_trend(self.latest, self.mid, self.earliest)
    }
}
