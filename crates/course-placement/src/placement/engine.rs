use std::sync::Arc;

use tracing::debug;

use super::catalog::CourseCatalog;
use super::domain::{Course, Sponsorship, StudentProfile};
use super::results::{CourseResult, RecommendationSummary, Recommendations};
use super::scoring::{
    cluster_score, estimate_probability, mean_score, meets_minimum, rate, PreconditionError,
};

/// Probability at or above which a course counts towards the high-probability tally.
pub const HIGH_PROBABILITY_THRESHOLD: u8 = 70;

/// Stateless ranker over an injected, read-only catalog.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<CourseCatalog>,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<CourseCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    pub fn recommend(&self, profile: &StudentProfile) -> Result<Recommendations, PreconditionError> {
        recommend(profile, self.catalog.courses())
    }

    /// Score a single course without applying preference or risk filters.
    pub fn evaluate(&self, profile: &StudentProfile, course_id: &str) -> Option<CourseResult> {
        self.catalog
            .get(course_id)
            .map(|course| score_course(profile, course))
    }
}

/// Filter, score and rank `courses` for `profile`.
pub fn recommend(
    profile: &StudentProfile,
    courses: &[Course],
) -> Result<Recommendations, PreconditionError> {
    let mean_score = mean_score(&profile.grades)?;

    let mut results: Vec<CourseResult> = courses
        .iter()
        .filter(|course| is_eligible(profile, course))
        .map(|course| score_course(profile, course))
        .filter(|result| profile.risk_appetite.admits(result.probability))
        .collect();

    // Stable: catalog order survives among equal keys.
    results.sort_by(|a, b| {
        b.interest_match
            .cmp(&a.interest_match)
            .then_with(|| b.probability.cmp(&a.probability))
    });

    let high_probability_count = results
        .iter()
        .filter(|result| result.probability >= HIGH_PROBABILITY_THRESHOLD)
        .count();

    debug!(
        catalog = courses.len(),
        shortlisted = results.len(),
        high_probability = high_probability_count,
        risk = profile.risk_appetite.label(),
        "recommendations ranked"
    );

    Ok(Recommendations {
        summary: RecommendationSummary {
            mean_score,
            total_courses: results.len(),
            high_probability_count,
        },
        results,
    })
}

fn is_eligible(profile: &StudentProfile, course: &Course) -> bool {
    if !profile.institution_type.accepts(course.institution_type) {
        return false;
    }

    !(profile.sponsorship == Sponsorship::Government && !course.sponsored)
}

fn score_course(profile: &StudentProfile, course: &Course) -> CourseResult {
    let cluster_points = cluster_score(&profile.grades, &course.cluster_subjects);
    let trend = course.cutoffs.trend();
    let meets_requirements = meets_minimum(&profile.grades, &course.minimum_requirements);
    let probability = if meets_requirements {
        estimate_probability(cluster_points, course.cutoffs.latest, trend)
    } else {
        0
    };

    CourseResult {
        course: course.clone(),
        cluster_points,
        probability,
        trend,
        competitiveness: rate(course.cutoffs.latest, course.level),
        meets_requirements,
        interest_match: profile.is_interested_in(course.cluster),
    }
}
