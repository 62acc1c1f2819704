use super::super::domain::SubjectGrade;
use super::super::subjects::is_compulsory;
use super::{round_one_decimal, PreconditionError};

/// Elective slots available after the compulsory subjects.
const ELECTIVE_SLOTS: usize = 4;
/// Cluster-relevant electives that receive the boosted weight.
const WEIGHTED_SLOTS: usize = 2;
const CLUSTER_WEIGHT: f64 = 1.5;

/// Unweighted mean points across every entered grade, rounded to one decimal.
pub fn mean_score(grades: &[SubjectGrade]) -> Result<f64, PreconditionError> {
    if grades.is_empty() {
        return Err(PreconditionError::EmptyGrades);
    }

    let total: u32 = grades.iter().map(|entry| u32::from(entry.points())).sum();
    Ok(round_one_decimal(f64::from(total) / grades.len() as f64))
}

/// Weighted cluster points of `grades` for a course whose relevant subjects are
/// `cluster_subjects`.
///
/// English, Kiswahili and Mathematics count once each when present. The best two
/// cluster-relevant electives count one and a half times, and the remaining elective slots
/// (four in total) are filled from the best other electives. Ties keep input order, so the
/// first-entered subject wins.
pub fn cluster_score<S: AsRef<str>>(grades: &[SubjectGrade], cluster_subjects: &[S]) -> f64 {
    let compulsory: u32 = grades
        .iter()
        .filter(|entry| is_compulsory(&entry.subject))
        .map(|entry| u32::from(entry.points()))
        .sum();

    let electives: Vec<&SubjectGrade> = grades
        .iter()
        .filter(|entry| !is_compulsory(&entry.subject))
        .collect();

    let mut relevant: Vec<&SubjectGrade> = electives
        .iter()
        .copied()
        .filter(|entry| {
            cluster_subjects
                .iter()
                .any(|subject| subject.as_ref() == entry.subject)
        })
        .collect();
    // `sort_by` is stable, which is what makes ties resolve by input order.
    relevant.sort_by(|a, b| b.points().cmp(&a.points()));
    relevant.truncate(WEIGHTED_SLOTS);

    let weighted: u32 = relevant.iter().map(|entry| u32::from(entry.points())).sum();

    let mut remaining: Vec<&SubjectGrade> = electives
        .into_iter()
        .filter(|entry| !relevant.iter().any(|picked| picked.subject == entry.subject))
        .collect();
    remaining.sort_by(|a, b| b.points().cmp(&a.points()));
    let fill: u32 = remaining
        .iter()
        .take(ELECTIVE_SLOTS - relevant.len())
        .map(|entry| u32::from(entry.points()))
        .sum();

    let total = f64::from(compulsory) + f64::from(weighted) * CLUSTER_WEIGHT + f64::from(fill);
    round_one_decimal(total)
}
