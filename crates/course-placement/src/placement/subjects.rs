//! KCSE subject vocabulary shared by profiles and catalog entries.

pub const ENGLISH: &str = "English";
pub const KISWAHILI: &str = "Kiswahili";
pub const MATHEMATICS: &str = "Mathematics";

/// Counted at weight 1 in every cluster score, regardless of the course.
pub const COMPULSORY_SUBJECTS: [&str; 3] = [ENGLISH, KISWAHILI, MATHEMATICS];

pub const SCIENCES: [&str; 3] = ["Biology", "Physics", "Chemistry"];
pub const HUMANITIES: [&str; 5] = ["History", "Geography", "CRE", "IRE", "HRE"];
pub const TECHNICAL: [&str; 5] = [
    "Computer Studies",
    "Agriculture",
    "Home Science",
    "Art & Design",
    "Aviation Technology",
];
pub const LANGUAGES: [&str; 4] = ["French", "German", "Arabic", "Music"];
pub const BUSINESS: [&str; 2] = ["Business Studies", "Economics"];

pub fn all_subjects() -> impl Iterator<Item = &'static str> {
    COMPULSORY_SUBJECTS
        .into_iter()
        .chain(SCIENCES)
        .chain(HUMANITIES)
        .chain(TECHNICAL)
        .chain(LANGUAGES)
        .chain(BUSINESS)
}

pub fn is_compulsory(subject: &str) -> bool {
    COMPULSORY_SUBJECTS.contains(&subject)
}

pub fn is_known_subject(subject: &str) -> bool {
    all_subjects().any(|known| known == subject)
}
