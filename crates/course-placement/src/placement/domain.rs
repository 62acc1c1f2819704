use serde::{Deserialize, Serialize};

use super::grades::Grade;

/// A single KCSE result line. Profiles hold at most one entry per subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectGrade {
    pub subject: String,
    pub grade: Grade,
}

impl SubjectGrade {
    pub fn new(subject: impl Into<String>, grade: Grade) -> Self {
        Self {
            subject: subject.into(),
            grade,
        }
    }

    pub const fn points(&self) -> u8 {
        self.grade.points()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningPreference {
    Theoretical,
    Practical,
    Mixed,
}

/// How much placement risk the student accepts when shortlisting courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskAppetite {
    Safe,
    Balanced,
    #[default]
    Competitive,
}

impl RiskAppetite {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Balanced => "Balanced",
            Self::Competitive => "Competitive",
        }
    }

    /// Whether a course with this placement probability stays on the shortlist.
    pub const fn admits(self, probability: u8) -> bool {
        match self {
            Self::Safe => probability >= 50,
            Self::Balanced => probability >= 25,
            Self::Competitive => probability > 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sponsorship {
    Government,
    #[serde(rename = "self")]
    SelfSponsored,
    Undecided,
}

/// Institution kind a course is offered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionType {
    University,
    Tvet,
    Kmtc,
}

impl InstitutionType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::University => "University",
            Self::Tvet => "TVET",
            Self::Kmtc => "KMTC",
        }
    }
}

/// Institution filter chosen by the student; `Any` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionPreference {
    University,
    Tvet,
    Kmtc,
    #[default]
    Any,
}

impl InstitutionPreference {
    pub fn accepts(self, institution: InstitutionType) -> bool {
        match self {
            Self::Any => true,
            Self::University => institution == InstitutionType::University,
            Self::Tvet => institution == InstitutionType::Tvet,
            Self::Kmtc => institution == InstitutionType::Kmtc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramLevel {
    Degree,
    Diploma,
    Certificate,
    Artisan,
}

impl ProgramLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Degree => "Degree",
            Self::Diploma => "Diploma",
            Self::Certificate => "Certificate",
            Self::Artisan => "Artisan",
        }
    }
}

/// Career clusters students pick their interests from and courses are tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerCluster {
    Tech,
    Health,
    Business,
    Education,
    Engineering,
    Creative,
    Agriculture,
    Law,
    Aviation,
    Hospitality,
    Trades,
}

impl CareerCluster {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::Tech,
            Self::Health,
            Self::Business,
            Self::Education,
            Self::Engineering,
            Self::Creative,
            Self::Agriculture,
            Self::Law,
            Self::Aviation,
            Self::Hospitality,
            Self::Trades,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Health => "health",
            Self::Business => "business",
            Self::Education => "education",
            Self::Engineering => "engineering",
            Self::Creative => "creative",
            Self::Agriculture => "agriculture",
            Self::Law => "law",
            Self::Aviation => "aviation",
            Self::Hospitality => "hospitality",
            Self::Trades => "trades",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tech => "Technology & Computing",
            Self::Health => "Health & Medicine",
            Self::Business => "Business & Finance",
            Self::Education => "Education & Training",
            Self::Engineering => "Engineering",
            Self::Creative => "Creative Arts & Media",
            Self::Agriculture => "Agriculture & Environment",
            Self::Law => "Law & Governance",
            Self::Aviation => "Aviation & Transport",
            Self::Hospitality => "Hospitality & Tourism",
            Self::Trades => "Skilled Trades",
        }
    }

    pub fn from_id(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|cluster| cluster.id().eq_ignore_ascii_case(trimmed))
    }
}

/// Validated input handed to the recommendation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentProfile {
    pub grades: Vec<SubjectGrade>,
    pub year: i32,
    pub career_interests: Vec<CareerCluster>,
    pub learning_preference: LearningPreference,
    pub risk_appetite: RiskAppetite,
    pub sponsorship: Sponsorship,
    pub institution_type: InstitutionPreference,
}

impl StudentProfile {
    pub fn grade_for(&self, subject: &str) -> Option<Grade> {
        self.grades
            .iter()
            .find(|entry| entry.subject == subject)
            .map(|entry| entry.grade)
    }

    pub fn is_interested_in(&self, cluster: CareerCluster) -> bool {
        self.career_interests.contains(&cluster)
    }
}

/// Minimum grade a course demands in one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRequirement {
    pub subject: String,
    pub min_grade: Grade,
}

impl SubjectRequirement {
    pub fn new(subject: impl Into<String>, min_grade: Grade) -> Self {
        Self {
            subject: subject.into(),
            min_grade,
        }
    }
}

/// Cluster-point cutoffs for the last three admission cycles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutoffHistory {
    pub latest: f64,
    pub mid: f64,
    pub earliest: f64,
}

impl CutoffHistory {
    pub const fn new(latest: f64, mid: f64, earliest: f64) -> Self {
        Self {
            latest,
            mid,
            earliest,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latest.is_finite() && self.mid.is_finite() && self.earliest.is_finite()
    }
}

/// Monthly salary band in KES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

/// Static catalog entry. Employment and career fields are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub institution_type: InstitutionType,
    pub level: ProgramLevel,
    pub cluster: CareerCluster,
    pub cutoffs: CutoffHistory,
    pub minimum_requirements: Vec<SubjectRequirement>,
    pub cluster_subjects: Vec<String>,
    pub employment_rate: u8,
    pub salary_range: SalaryRange,
    pub career_paths: Vec<String>,
    pub description: String,
    pub sponsored: bool,
}
