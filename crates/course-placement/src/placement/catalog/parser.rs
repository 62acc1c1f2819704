use serde::Deserialize;
use std::io::Read;

use super::super::domain::{
    CareerCluster, Course, CutoffHistory, InstitutionType, ProgramLevel, SalaryRange,
    SubjectRequirement,
};
use super::super::grades::Grade;
use super::{CatalogError, CatalogRecordError};

const LIST_SEPARATOR: char = ';';
const REQUIREMENT_SEPARATOR: char = ':';

/// One row of a spreadsheet catalog export.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogRow {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub institution_type: InstitutionType,
    pub level: ProgramLevel,
    pub cluster: String,
    pub cutoff_latest: f64,
    pub cutoff_mid: f64,
    pub cutoff_earliest: f64,
    #[serde(default)]
    pub minimum_requirements: String,
    #[serde(default)]
    pub cluster_subjects: String,
    pub employment_rate: u8,
    pub salary_min: u32,
    pub salary_max: u32,
    #[serde(default)]
    pub career_paths: String,
    #[serde(default)]
    pub description: String,
    pub sponsored: bool,
}

pub(crate) fn read_rows<R: Read>(reader: R) -> Result<Vec<Course>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut courses = Vec::new();

    for (index, row) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let row = row?;
        // Header is line 1, so the first record sits on line 2.
        let line = index + 2;
        let course = row
            .into_course()
            .map_err(|source| CatalogError::InvalidRecord { line, source })?;
        courses.push(course);
    }

    Ok(courses)
}

impl CatalogRow {
    fn into_course(self) -> Result<Course, CatalogRecordError> {
        let cluster = CareerCluster::from_id(&self.cluster)
            .ok_or_else(|| CatalogRecordError::UnknownCluster(self.cluster.clone()))?;

        let minimum_requirements = split_list(&self.minimum_requirements)
            .map(parse_requirement)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Course {
            id: self.id,
            name: self.name,
            institution: self.institution,
            institution_type: self.institution_type,
            level: self.level,
            cluster,
            cutoffs: CutoffHistory::new(
                self.cutoff_latest,
                self.cutoff_mid,
                self.cutoff_earliest,
            ),
            minimum_requirements,
            cluster_subjects: split_list(&self.cluster_subjects)
                .map(str::to_string)
                .collect(),
            employment_rate: self.employment_rate,
            salary_range: SalaryRange {
                min: self.salary_min,
                max: self.salary_max,
            },
            career_paths: split_list(&self.career_paths)
                .map(str::to_string)
                .collect(),
            description: self.description,
            sponsored: self.sponsored,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

fn parse_requirement(raw: &str) -> Result<SubjectRequirement, CatalogRecordError> {
    let (subject, grade) = raw
        .rsplit_once(REQUIREMENT_SEPARATOR)
        .ok_or_else(|| CatalogRecordError::MalformedRequirement(raw.to_string()))?;

    let grade: Grade = grade.parse()?;
    Ok(SubjectRequirement::new(subject.trim(), grade))
}
