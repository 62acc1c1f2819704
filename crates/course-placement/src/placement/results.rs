use serde::Serialize;

use super::domain::Course;
use super::scoring::{Competitiveness, ProbabilityBand, Trend};

/// A catalog course scored against one student profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseResult {
    #[serde(flatten)]
    pub course: Course,
    pub cluster_points: f64,
    /// 0 when requirements are unmet, otherwise within 1..=99.
    pub probability: u8,
    pub trend: Trend,
    pub competitiveness: Competitiveness,
    pub meets_requirements: bool,
    pub interest_match: bool,
}

impl CourseResult {
    pub fn band(&self) -> ProbabilityBand {
        ProbabilityBand::from_probability(self.probability)
    }

    /// Cluster points minus the latest cutoff.
    pub fn margin(&self) -> f64 {
        self.cluster_points - self.course.cutoffs.latest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecommendationSummary {
    pub mean_score: f64,
    pub total_courses: usize,
    pub high_probability_count: usize,
}

/// Ranked shortlist plus headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub summary: RecommendationSummary,
    pub results: Vec<CourseResult>,
}

impl Recommendations {
    /// The first `count` results, the headline picks.
    pub fn top(&self, count: usize) -> &[CourseResult] {
        &self.results[..count.min(self.results.len())]
    }

    pub fn remaining(&self, count: usize) -> &[CourseResult] {
        &self.results[count.min(self.results.len())..]
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
