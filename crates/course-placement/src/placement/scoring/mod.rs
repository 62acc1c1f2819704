mod cluster;
mod competitiveness;
mod probability;
mod requirements;
mod trend;

pub use cluster::{cluster_score, mean_score};
pub use competitiveness::{rate, Competitiveness};
pub use probability::{estimate_probability, ProbabilityBand};
pub use requirements::{meets_minimum, unmet_requirements};
pub use trend::{classify_trend, Trend};

/// Raised when the engine is invoked with input the profile boundary should have rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionError {
    #[error("at least one subject grade is required before scoring")]
    EmptyGrades,
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
