use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// KCSE letter grade. Variants are declared from lowest to highest so the derived ordering
/// follows academic rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "E")]
    E,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "A")]
    A,
}

impl Grade {
    /// Highest grade first, the order used on KCSE result slips.
    pub const fn ordered() -> [Self; 12] {
        [
            Self::A,
            Self::AMinus,
            Self::BPlus,
            Self::B,
            Self::BMinus,
            Self::CPlus,
            Self::C,
            Self::CMinus,
            Self::DPlus,
            Self::D,
            Self::DMinus,
            Self::E,
        ]
    }

    pub const fn points(self) -> u8 {
        match self {
            Self::A => 12,
            Self::AMinus => 11,
            Self::BPlus => 10,
            Self::B => 9,
            Self::BMinus => 8,
            Self::CPlus => 7,
            Self::C => 6,
            Self::CMinus => 5,
            Self::DPlus => 4,
            Self::D => 3,
            Self::DMinus => 2,
            Self::E => 1,
        }
    }

    pub const fn from_points(points: u8) -> Option<Self> {
        match points {
            12 => Some(Self::A),
            11 => Some(Self::AMinus),
            10 => Some(Self::BPlus),
            9 => Some(Self::B),
            8 => Some(Self::BMinus),
            7 => Some(Self::CPlus),
            6 => Some(Self::C),
            5 => Some(Self::CMinus),
            4 => Some(Self::DPlus),
            3 => Some(Self::D),
            2 => Some(Self::DMinus),
            1 => Some(Self::E),
            _ => None,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a KCSE grade (expected A, A-, B+ ... E)")]
pub struct UnknownGrade(pub String);

impl FromStr for Grade {
    type Err = UnknownGrade;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|grade| grade.symbol().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownGrade(raw.to_string()))
    }
}
