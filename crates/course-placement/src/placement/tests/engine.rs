use std::sync::Arc;

use super::common::*;
use crate::placement::catalog::CourseCatalog;
use crate::placement::domain::{
    CareerCluster, InstitutionPreference, RiskAppetite, Sponsorship,
};
use crate::placement::engine::{recommend, RecommendationEngine};
use crate::placement::grades::Grade;
use crate::placement::scoring::{Competitiveness, PreconditionError, ProbabilityBand, Trend};

fn ids(recommendations: &crate::placement::Recommendations) -> Vec<&str> {
    recommendations
        .results
        .iter()
        .map(|result| result.course.id.as_str())
        .collect()
}

fn standard_engine() -> RecommendationEngine {
    RecommendationEngine::new(Arc::new(CourseCatalog::standard()))
}

#[test]
fn ranks_standard_catalog_for_science_student() {
    let recommendations = standard_engine()
        .recommend(&science_profile())
        .expect("profile has grades");

    assert_eq!(
        ids(&recommendations),
        vec![
            "medicine-uon",
            "nursing-kmtc",
            "clinical-medicine-kmtc",
            "bsc-cs-uon",
            "bcom-strathmore",
            "electrical-tvet",
            "architecture-jkuat",
            "hospitality-tvet",
        ]
    );
    assert_eq!(recommendations.summary.mean_score, 9.7);
    assert_eq!(recommendations.summary.total_courses, 8);
    assert_eq!(recommendations.summary.high_probability_count, 8);

    let medicine = &recommendations.results[0];
    assert_eq!(medicine.cluster_points, 79.0);
    assert_eq!(medicine.probability, 90);
    assert_eq!(medicine.trend, Trend::Rising);
    assert_eq!(medicine.competitiveness, Competitiveness::VeryHigh);
    assert!(medicine.interest_match);
    assert!(medicine.meets_requirements);
    assert_eq!(medicine.band(), ProbabilityBand::High);
}

#[test]
fn unmet_requirements_zero_probability_and_drop_out() {
    let engine = standard_engine();
    let profile = science_profile();

    let law = engine.evaluate(&profile, "law-uon").expect("law is in catalog");
    assert!(!law.meets_requirements);
    assert_eq!(law.probability, 0);
    assert!(engine.evaluate(&profile, "astronomy-uon").is_none());

    let mut competitive = science_profile();
    competitive.risk_appetite = RiskAppetite::Competitive;
    let recommendations = engine.recommend(&competitive).expect("profile has grades");
    let ids = ids(&recommendations);
    assert!(!ids.contains(&"law-uon"));
    assert!(!ids.contains(&"actuarial-uon"));
}

#[test]
fn government_sponsorship_excludes_unsponsored_courses() {
    let mut profile = science_profile();
    profile.sponsorship = Sponsorship::Government;

    let recommendations = standard_engine()
        .recommend(&profile)
        .expect("profile has grades");

    assert_eq!(recommendations.summary.total_courses, 7);
    assert!(recommendations
        .results
        .iter()
        .all(|result| result.course.sponsored));
}

#[test]
fn institution_preference_filters_catalog() {
    let mut profile = science_profile();
    profile.institution_type = InstitutionPreference::Kmtc;

    let recommendations = standard_engine()
        .recommend(&profile)
        .expect("profile has grades");

    assert_eq!(
        ids(&recommendations),
        vec!["nursing-kmtc", "clinical-medicine-kmtc"]
    );
}

#[test]
fn risk_appetite_sets_probability_floor() {
    // Science slip scores 79 against Biology/Chemistry; flat cutoffs keep the trend stable.
    let courses = vec![
        course("near", 79.0),
        course("reach", 80.5),
        course("long-shot", 81.5),
        course("out-of-reach", 83.0),
    ];
    let mut profile = science_profile();
    profile.career_interests.clear();

    let expectations = [
        (RiskAppetite::Safe, vec!["near"]),
        (RiskAppetite::Balanced, vec!["near", "reach"]),
        (RiskAppetite::Competitive, vec!["near", "reach", "long-shot"]),
    ];

    for (appetite, expected) in expectations {
        profile.risk_appetite = appetite;
        let recommendations = recommend(&profile, &courses).expect("profile has grades");
        assert_eq!(ids(&recommendations), expected, "{}", appetite.label());
    }
}

#[test]
fn interest_match_outranks_probability() {
    let mut health = course("health-reach", 80.5);
    health.cluster = CareerCluster::Health;
    let courses = vec![course("tech-safe", 70.0), health];

    let recommendations = recommend(&science_profile(), &courses).expect("profile has grades");

    assert_eq!(ids(&recommendations), vec!["health-reach", "tech-safe"]);
    assert_eq!(recommendations.results[0].probability, 25);
    assert_eq!(recommendations.results[1].probability, 95);
    assert_eq!(recommendations.summary.high_probability_count, 1);
}

#[test]
fn equal_keys_keep_catalog_order() {
    let courses = vec![
        course("first", 70.0),
        course("second", 70.0),
        course("third", 70.0),
    ];

    let recommendations = recommend(&science_profile(), &courses).expect("profile has grades");

    assert_eq!(ids(&recommendations), vec!["first", "second", "third"]);
}

#[test]
fn missing_requirement_subject_is_unmet() {
    let mut gated = course("gated", 60.0);
    gated.minimum_requirements = vec![requirement("Geography", Grade::E)];
    let mut profile = science_profile();
    profile.risk_appetite = RiskAppetite::Competitive;

    let recommendations = recommend(&profile, &[gated]).expect("profile has grades");

    assert!(recommendations.is_empty());
    assert_eq!(recommendations.summary.total_courses, 0);
}

#[test]
fn empty_grades_fail_precondition() {
    let result = recommend(&profile(Vec::new()), CourseCatalog::standard().courses());

    assert_eq!(result, Err(PreconditionError::EmptyGrades));
}

#[test]
fn recommendations_split_into_top_and_remaining() {
    let recommendations = standard_engine()
        .recommend(&science_profile())
        .expect("profile has grades");

    assert_eq!(recommendations.top(3).len(), 3);
    assert_eq!(recommendations.remaining(3).len(), 5);
    assert_eq!(recommendations.top(20).len(), 8);
    assert!(recommendations.remaining(20).is_empty());

    let cs = recommendations
        .results
        .iter()
        .find(|result| result.course.id == "bsc-cs-uon")
        .expect("cs shortlisted");
    assert_eq!(cs.cluster_points, 78.0);
    assert_eq!(cs.margin(), 78.0 - 42.5);
}
