use super::common::*;
use crate::placement::domain::{CutoffHistory, ProgramLevel};
use crate::placement::grades::Grade;
use crate::placement::scoring::{
    classify_trend, cluster_score, estimate_probability, mean_score, meets_minimum, rate,
    unmet_requirements, Competitiveness, ProbabilityBand, Trend,
};

#[test]
fn cluster_score_weights_top_two_relevant_subjects() {
    let grades = science_grades();

    let score = cluster_score(&grades, &["Biology", "Chemistry", "Physics"]);

    // compulsory 9 + 9 + 10, Biology and Chemistry at 1.5x, Physics and History fill.
    assert_eq!(score, 28.0 + 33.0 + 18.0);
}

#[test]
fn cluster_score_is_reproducible() {
    let grades = science_grades();
    let subjects = ["Biology", "Chemistry", "Physics"];

    let first = cluster_score(&grades, &subjects);
    for _ in 0..5 {
        assert_eq!(cluster_score(&grades, &subjects), first);
    }
}

#[test]
fn cluster_score_ties_resolve_by_entry_order() {
    // Geography and CRE tie at 9 points for the last fill slot; Geography was entered first.
    let grades = vec![
        grade("Biology", Grade::A),
        grade("Physics", Grade::A),
        grade("Chemistry", Grade::A),
        grade("Geography", Grade::B),
        grade("CRE", Grade::B),
        grade("Agriculture", Grade::C),
    ];
    let with_geography_first = cluster_score(&grades, &["Biology"]);

    let mut reordered = grades.clone();
    reordered.swap(3, 4);
    let with_cre_first = cluster_score(&reordered, &["Biology"]);

    assert_eq!(with_geography_first, 12.0 * 1.5 + 12.0 + 12.0 + 9.0);
    assert_eq!(with_geography_first, with_cre_first);
}

#[test]
fn cluster_score_skips_missing_compulsory_subjects() {
    let grades = vec![grade("Biology", Grade::B), grade("Chemistry", Grade::C)];

    let score = cluster_score(&grades, &["Biology"]);

    assert_eq!(score, 9.0 * 1.5 + 6.0);
}

#[test]
fn cluster_score_uses_only_four_elective_slots() {
    let grades = vec![
        grade("Biology", Grade::A),
        grade("Chemistry", Grade::A),
        grade("Physics", Grade::A),
        grade("History", Grade::A),
        grade("Geography", Grade::A),
        grade("CRE", Grade::A),
    ];

    let score = cluster_score(&grades, &["Biology", "Chemistry", "Physics"]);

    assert_eq!(score, 12.0 * 1.5 * 2.0 + 12.0 * 2.0);
}

#[test]
fn raising_a_cluster_grade_never_lowers_the_score() {
    let subjects = ["Biology", "Chemistry", "Physics"];

    for index in 0..science_grades().len() {
        let baseline = science_grades();
        let before = cluster_score(&baseline, &subjects);

        for improved_points in baseline[index].points()..=12 {
            let mut improved = science_grades();
            improved[index].grade = Grade::from_points(improved_points).expect("valid points");
            let after = cluster_score(&improved, &subjects);
            assert!(
                after >= before,
                "raising {} to {} dropped score {} -> {}",
                improved[index].subject,
                improved[index].grade,
                before,
                after
            );
        }
    }
}

#[test]
fn mean_score_is_permutation_invariant() {
    let grades = science_grades();
    let expected = mean_score(&grades).expect("grades present");
    assert_eq!(expected, 9.7);

    let mut reversed = grades.clone();
    reversed.reverse();
    assert_eq!(mean_score(&reversed), Ok(expected));

    let mut rotated = grades;
    rotated.rotate_left(3);
    assert_eq!(mean_score(&rotated), Ok(expected));
}

#[test]
fn meets_minimum_requires_every_subject() {
    let grades = science_grades();
    let requirements = vec![
        requirement("Biology", Grade::BPlus),
        requirement("Mathematics", Grade::BPlus),
    ];
    assert!(meets_minimum(&grades, &requirements));

    let with_missing = vec![
        requirement("Biology", Grade::E),
        requirement("Geography", Grade::E),
    ];
    assert!(!meets_minimum(&grades, &with_missing));
    let unmet = unmet_requirements(&grades, &with_missing);
    assert_eq!(unmet.len(), 1);
    assert_eq!(unmet[0].subject, "Geography");
}

#[test]
fn meets_minimum_fails_below_threshold() {
    let grades = science_grades();
    let requirements = vec![requirement("English", Grade::BPlus)];

    assert!(!meets_minimum(&grades, &requirements));
    assert!(meets_minimum(&grades, &[]));
}

#[test]
fn trend_classifies_reference_history() {
    assert_eq!(classify_trend(42.5, 41.8, 40.2), Trend::Rising);
    assert_eq!(classify_trend(40.0, 40.2, 40.1), Trend::Stable);
    assert_eq!(classify_trend(38.0, 39.5, 41.0), Trend::Falling);
    assert_eq!(CutoffHistory::new(42.5, 41.8, 40.2).trend(), Trend::Rising);
}

#[test]
fn trend_is_symmetric_under_negation() {
    let histories = [
        (42.5, 41.8, 40.2),
        (30.0, 30.4, 30.1),
        (25.0, 27.0, 28.5),
        (10.0, 10.5, 11.0),
    ];

    for (latest, mid, earliest) in histories {
        let forward = classify_trend(latest, mid, earliest);
        let negated = classify_trend(-latest, -mid, -earliest);
        let expected = match forward {
            Trend::Rising => Trend::Falling,
            Trend::Falling => Trend::Rising,
            Trend::Stable => Trend::Stable,
        };
        assert_eq!(negated, expected, "history {latest}/{mid}/{earliest}");
    }
}

#[test]
fn probability_follows_step_table() {
    let cases = [
        (5.0, 95),
        (3.0, 85),
        (4.9, 85),
        (1.0, 70),
        (0.0, 55),
        (-0.5, 40),
        (-1.0, 40),
        (-1.5, 25),
        (-2.5, 15),
        (-3.0, 15),
        (-3.1, 5),
    ];

    for (diff, expected) in cases {
        assert_eq!(
            estimate_probability(40.0 + diff, 40.0, Trend::Stable),
            expected,
            "diff {diff}"
        );
    }
}

#[test]
fn probability_adjusts_for_trend() {
    assert_eq!(estimate_probability(41.0, 42.5, Trend::Rising), 20);
    assert_eq!(estimate_probability(41.0, 42.5, Trend::Falling), 30);
    assert_eq!(estimate_probability(60.0, 42.5, Trend::Falling), 99);
    assert_eq!(estimate_probability(10.0, 42.5, Trend::Rising), 1);
}

#[test]
fn probability_is_bounded_and_monotonic() {
    for trend in [Trend::Rising, Trend::Stable, Trend::Falling] {
        let mut previous = u8::MAX;
        for step in 0..=200 {
            let diff = 10.0 - f64::from(step) * 0.1;
            let probability = estimate_probability(30.0 + diff, 30.0, trend);
            assert!((1..=99).contains(&probability));
            assert!(probability <= previous, "{trend:?} at diff {diff}");
            previous = probability;
        }
    }
}

#[test]
fn probability_bands_partition_percentages() {
    assert_eq!(ProbabilityBand::from_probability(70), ProbabilityBand::High);
    assert_eq!(ProbabilityBand::from_probability(69), ProbabilityBand::Medium);
    assert_eq!(ProbabilityBand::from_probability(40), ProbabilityBand::Medium);
    assert_eq!(ProbabilityBand::from_probability(39), ProbabilityBand::Low);
}

#[test]
fn competitiveness_depends_on_level() {
    assert_eq!(rate(44.0, ProgramLevel::Degree), Competitiveness::VeryHigh);
    assert_eq!(rate(43.9, ProgramLevel::Degree), Competitiveness::High);
    assert_eq!(rate(32.0, ProgramLevel::Degree), Competitiveness::Medium);
    assert_eq!(rate(31.9, ProgramLevel::Degree), Competitiveness::Low);

    assert_eq!(rate(34.0, ProgramLevel::Diploma), Competitiveness::VeryHigh);
    assert_eq!(rate(28.0, ProgramLevel::Diploma), Competitiveness::High);
    assert_eq!(rate(22.0, ProgramLevel::Diploma), Competitiveness::Medium);
    assert_eq!(rate(21.9, ProgramLevel::Diploma), Competitiveness::Low);

    assert_eq!(rate(48.0, ProgramLevel::Certificate), Competitiveness::Low);
    assert_eq!(rate(48.0, ProgramLevel::Artisan), Competitiveness::Low);
}
