use super::super::domain::{SubjectGrade, SubjectRequirement};

/// True when every requirement names a subject the student sat and scored at least the
/// minimum grade in. A missing subject fails the requirement.
pub fn meets_minimum(grades: &[SubjectGrade], requirements: &[SubjectRequirement]) -> bool {
    requirements
        .iter()
        .all(|requirement| unmet(grades, requirement).is_none())
}

/// Requirements the student does not satisfy, in catalog order.
pub fn unmet_requirements<'a>(
    grades: &[SubjectGrade],
    requirements: &'a [SubjectRequirement],
) -> Vec<&'a SubjectRequirement> {
    requirements
        .iter()
        .filter(|requirement| unmet(grades, requirement).is_some())
        .collect()
}

fn unmet<'a>(
    grades: &[SubjectGrade],
    requirement: &'a SubjectRequirement,
) -> Option<&'a SubjectRequirement> {
    let held = grades
        .iter()
        .find(|entry| entry.subject == requirement.subject);

    match held {
        Some(entry) if entry.points() >= requirement.min_grade.points() => None,
        _ => Some(requirement),
    }
}
