use axum::response::Response;
use serde_json::Value;

use crate::placement::domain::{
    CareerCluster, Course, CutoffHistory, InstitutionPreference, InstitutionType,
    LearningPreference, ProgramLevel, RiskAppetite, SalaryRange, Sponsorship, StudentProfile,
    SubjectGrade, SubjectRequirement,
};
use crate::placement::grades::Grade;
use crate::placement::profile::{ProfileGuard, ProfileSubmission};

pub(super) fn grade(subject: &str, grade: Grade) -> SubjectGrade {
    SubjectGrade::new(subject, grade)
}

/// Seven-subject result slip used across scoring scenarios.
pub(super) fn science_grades() -> Vec<SubjectGrade> {
    vec![
        grade("English", Grade::B),
        grade("Kiswahili", Grade::B),
        grade("Mathematics", Grade::BPlus),
        grade("Biology", Grade::AMinus),
        grade("Chemistry", Grade::AMinus),
        grade("Physics", Grade::B),
        grade("History", Grade::B),
    ]
}

pub(super) fn profile(grades: Vec<SubjectGrade>) -> StudentProfile {
    StudentProfile {
        grades,
        year: 2024,
        career_interests: vec![CareerCluster::Health],
        learning_preference: LearningPreference::Mixed,
        risk_appetite: RiskAppetite::Balanced,
        sponsorship: Sponsorship::Undecided,
        institution_type: InstitutionPreference::Any,
    }
}

pub(super) fn science_profile() -> StudentProfile {
    profile(science_grades())
}

pub(super) fn submission() -> ProfileSubmission {
    ProfileSubmission {
        grades: science_grades(),
        year: 2024,
        career_interests: vec![CareerCluster::Health, CareerCluster::Tech],
        learning_preference: LearningPreference::Practical,
        risk_appetite: RiskAppetite::Balanced,
        sponsorship: Sponsorship::Government,
        institution_type: InstitutionPreference::Any,
    }
}

pub(super) fn guard() -> ProfileGuard {
    ProfileGuard::for_year(2025)
}

/// Synthetic course with a flat cutoff history and no requirements.
pub(super) fn course(id: &str, cutoff: f64) -> Course {
    Course {
        id: id.to_string(),
        name: format!("Course {id}"),
        institution: "Test University".to_string(),
        institution_type: InstitutionType::University,
        level: ProgramLevel::Degree,
        cluster: CareerCluster::Tech,
        cutoffs: CutoffHistory::new(cutoff, cutoff, cutoff),
        minimum_requirements: Vec::new(),
        cluster_subjects: vec!["Biology".to_string(), "Chemistry".to_string()],
        employment_rate: 80,
        salary_range: SalaryRange {
            min: 40_000,
            max: 90_000,
        },
        career_paths: vec!["Analyst".to_string()],
        description: "Synthetic course".to_string(),
        sponsored: true,
    }
}

pub(super) fn requirement(subject: &str, min_grade: Grade) -> SubjectRequirement {
    SubjectRequirement::new(subject, min_grade)
}

pub(super) const CATALOG_CSV_HEADER: &str = "id,name,institution,institution_type,level,cluster,cutoff_latest,cutoff_mid,cutoff_earliest,minimum_requirements,cluster_subjects,employment_rate,salary_min,salary_max,career_paths,description,sponsored\n";

pub(super) fn catalog_csv(rows: &[&str]) -> String {
    let mut csv = CATALOG_CSV_HEADER.to_string();
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    csv
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
