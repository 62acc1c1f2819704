//! Placement intelligence: grade scoring, course eligibility, and ranked recommendations.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod grades;
pub mod profile;
pub mod results;
pub mod router;
pub mod scoring;
pub mod subjects;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CatalogRecordError, CourseCatalog};
pub use domain::{
    CareerCluster, Course, CutoffHistory, InstitutionPreference, InstitutionType,
    LearningPreference, ProgramLevel, RiskAppetite, SalaryRange, Sponsorship, StudentProfile,
    SubjectGrade, SubjectRequirement,
};
pub use engine::{recommend, RecommendationEngine, HIGH_PROBABILITY_THRESHOLD};
pub use grades::{Grade, UnknownGrade};
pub use profile::{ProfileError, ProfileGuard, ProfileSubmission};
pub use results::{CourseResult, RecommendationSummary, Recommendations};
pub use router::{placement_router, PlacementState};
pub use scoring::{
    classify_trend, cluster_score, estimate_probability, mean_score, meets_minimum, rate,
    Competitiveness, PreconditionError, ProbabilityBand, Trend,
};
