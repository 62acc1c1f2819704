use std::collections::HashSet;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use super::domain::{
    CareerCluster, InstitutionPreference, LearningPreference, RiskAppetite, Sponsorship,
    StudentProfile, SubjectGrade,
};
use super::subjects::{is_known_subject, COMPULSORY_SUBJECTS};

/// First KCSE sitting under the 8-4-4 system.
const FIRST_KCSE_YEAR: i32 = 1989;
const MAX_CAREER_INTERESTS: usize = 3;

/// Raw profile as collected by the input flow, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub grades: Vec<SubjectGrade>,
    pub year: i32,
    #[serde(default)]
    pub career_interests: Vec<CareerCluster>,
    pub learning_preference: LearningPreference,
    #[serde(default)]
    pub risk_appetite: RiskAppetite,
    pub sponsorship: Sponsorship,
    #[serde(default)]
    pub institution_type: InstitutionPreference,
}

impl ProfileSubmission {
    /// Compulsory subjects the student has not entered. Scoring skips them, so callers usually
    /// surface this as a warning.
    pub fn missing_compulsory_subjects(&self) -> Vec<&'static str> {
        missing_compulsory(&self.grades)
    }
}

impl StudentProfile {
    pub fn missing_compulsory_subjects(&self) -> Vec<&'static str> {
        missing_compulsory(&self.grades)
    }
}

fn missing_compulsory(grades: &[SubjectGrade]) -> Vec<&'static str> {
    COMPULSORY_SUBJECTS
        .into_iter()
        .filter(|subject| !grades.iter().any(|entry| entry.subject == *subject))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("at least one subject grade is required")]
    NoGrades,
    #[error("'{0}' is not a KCSE subject")]
    UnknownSubject(String),
    #[error("subject '{0}' was entered more than once")]
    DuplicateSubject(String),
    #[error("at most {max} career interests may be selected (found {found})")]
    TooManyCareerInterests { max: usize, found: usize },
    #[error("career interest '{0}' was selected more than once")]
    DuplicateCareerInterest(&'static str),
    #[error("exam year {year} is outside {earliest}..={latest}")]
    ExamYearOutOfRange { year: i32, earliest: i32, latest: i32 },
}

/// Guard responsible for producing `StudentProfile` instances.
#[derive(Debug, Clone)]
pub struct ProfileGuard {
    current_year: i32,
}

impl Default for ProfileGuard {
    fn default() -> Self {
        Self::for_year(Local::now().year())
    }
}

impl ProfileGuard {
    /// Guard that treats `current_year` as the latest exam sitting allowed.
    pub fn for_year(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn profile_from_submission(
        &self,
        submission: ProfileSubmission,
    ) -> Result<StudentProfile, ProfileError> {
        self.validate(&submission)?;

        let ProfileSubmission {
            grades,
            year,
            career_interests,
            learning_preference,
            risk_appetite,
            sponsorship,
            institution_type,
        } = submission;

        Ok(StudentProfile {
            grades,
            year,
            career_interests,
            learning_preference,
            risk_appetite,
            sponsorship,
            institution_type,
        })
    }

    pub fn validate(&self, submission: &ProfileSubmission) -> Result<(), ProfileError> {
        if submission.grades.is_empty() {
            return Err(ProfileError::NoGrades);
        }

        let mut seen_subjects = HashSet::new();
        for entry in &submission.grades {
            if !is_known_subject(&entry.subject) {
                return Err(ProfileError::UnknownSubject(entry.subject.clone()));
            }
            if !seen_subjects.insert(entry.subject.as_str()) {
                return Err(ProfileError::DuplicateSubject(entry.subject.clone()));
            }
        }

        if submission.career_interests.len() > MAX_CAREER_INTERESTS {
            return Err(ProfileError::TooManyCareerInterests {
                max: MAX_CAREER_INTERESTS,
                found: submission.career_interests.len(),
            });
        }

        let mut seen_interests = HashSet::new();
        for cluster in &submission.career_interests {
            if !seen_interests.insert(*cluster) {
                return Err(ProfileError::DuplicateCareerInterest(cluster.id()));
            }
        }

        if submission.year < FIRST_KCSE_YEAR || submission.year > self.current_year {
            return Err(ProfileError::ExamYearOutOfRange {
                year: submission.year,
                earliest: FIRST_KCSE_YEAR,
                latest: self.current_year,
            });
        }

        Ok(())
    }
}
