use serde::{Deserialize, Serialize};

use super::super::domain::ProgramLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Competitiveness {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Competitiveness {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

/// `(very_high, high, medium)` lower bounds per level.
const fn thresholds(level: ProgramLevel) -> Option<(f64, f64, f64)> {
    match level {
        ProgramLevel::Degree => Some((44.0, 38.0, 32.0)),
        ProgramLevel::Diploma => Some((34.0, 28.0, 22.0)),
        ProgramLevel::Certificate | ProgramLevel::Artisan => None,
    }
}

/// Tier of a course's latest cutoff, independent of any student.
pub fn rate(cutoff: f64, level: ProgramLevel) -> Competitiveness {
    let Some((very_high, high, medium)) = thresholds(level) else {
        return Competitiveness::Low;
    };

    if cutoff >= very_high {
        Competitiveness::VeryHigh
    } else if cutoff >= high {
        Competitiveness::High
    } else if cutoff >= medium {
        Competitiveness::Medium
    } else {
        Competitiveness::Low
    }
}
