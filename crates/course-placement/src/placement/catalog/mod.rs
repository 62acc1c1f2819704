mod parser;
mod standard;

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use super::domain::Course;
use super::grades::UnknownGrade;
use super::subjects::is_known_subject;

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnsupportedFormat(String),
    InvalidRecord {
        line: usize,
        source: CatalogRecordError,
    },
    InvalidCourse {
        course_id: String,
        source: CatalogRecordError,
    },
    DuplicateCourse(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read course catalog: {}", err),
            CatalogError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogError::Json(err) => write!(f, "invalid catalog JSON data: {}", err),
            CatalogError::UnsupportedFormat(path) => {
                write!(f, "catalog file {} is neither .json nor .csv", path)
            }
            CatalogError::InvalidRecord { line, source } => {
                write!(f, "catalog line {}: {}", line, source)
            }
            CatalogError::InvalidCourse { course_id, source } => {
                write!(f, "course {}: {}", course_id, source)
            }
            CatalogError::DuplicateCourse(id) => {
                write!(f, "course id {} appears more than once", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::InvalidRecord { source, .. }
            | CatalogError::InvalidCourse { source, .. } => Some(source),
            CatalogError::UnsupportedFormat(_) | CatalogError::DuplicateCourse(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Problems with a single catalog entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogRecordError {
    #[error("unknown career cluster '{0}'")]
    UnknownCluster(String),
    #[error("requirement '{0}' must look like Subject:Grade")]
    MalformedRequirement(String),
    #[error(transparent)]
    Grade(#[from] UnknownGrade),
    #[error("'{0}' is not a KCSE subject")]
    UnknownSubject(String),
    #[error("cutoffs must be finite numbers")]
    NonFiniteCutoff,
    #[error("employment rate {0} exceeds 100%")]
    EmploymentRateOutOfRange(u8),
    #[error("salary range {min}..{max} is inverted")]
    InvertedSalaryRange { min: u32, max: u32 },
}

/// Read-only snapshot of the courses the engine ranks.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Validate and wrap `courses`, keeping their order.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for course in &courses {
            validate_course(course).map_err(|source| CatalogError::InvalidCourse {
                course_id: course.id.clone(),
                source,
            })?;
            if !ids.insert(course.id.as_str()) {
                return Err(CatalogError::DuplicateCourse(course.id.clone()));
            }
        }

        debug!(courses = courses.len(), "course catalog validated");
        Ok(Self { courses })
    }

    /// The reference courses bundled with the engine.
    pub fn standard() -> Self {
        Self {
            courses: standard::standard_courses(),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let courses: Vec<Course> = serde_json::from_reader(reader)?;
        Self::new(courses)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let courses = parser::read_rows(reader)?;
        Self::new(courses)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Load a catalog file, picking the format from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let catalog = match extension.as_deref() {
            Some("json") => Self::from_json_path(path)?,
            Some("csv") => Self::from_csv_path(path)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        info!(path = %path.display(), courses = catalog.len(), "course catalog loaded");
        Ok(catalog)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl<'a> IntoIterator for &'a CourseCatalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_course(course: &Course) -> Result<(), CatalogRecordError> {
    if !course.cutoffs.is_finite() {
        return Err(CatalogRecordError::NonFiniteCutoff);
    }

    if course.employment_rate > 100 {
        return Err(CatalogRecordError::EmploymentRateOutOfRange(
            course.employment_rate,
        ));
    }

    if course.salary_range.min > course.salary_range.max {
        return Err(CatalogRecordError::InvertedSalaryRange {
            min: course.salary_range.min,
            max: course.salary_range.max,
        });
    }

    let subjects = course
        .minimum_requirements
        .iter()
        .map(|requirement| requirement.subject.as_str())
        .chain(course.cluster_subjects.iter().map(String::as_str));
    for subject in subjects {
        if !is_known_subject(subject) {
            return Err(CatalogRecordError::UnknownSubject(subject.to_string()));
        }
    }

    Ok(())
}
