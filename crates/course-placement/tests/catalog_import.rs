use std::path::Path;

use course_placement::placement::{
    rate, CatalogError, CourseCatalog, Competitiveness, Grade, InstitutionType, ProgramLevel,
    Trend,
};

fn sample_catalog() -> CourseCatalog {
    let data = include_bytes!("../data/sample_catalog.csv");
    CourseCatalog::from_csv_reader(&data[..]).expect("sample catalog imports")
}

#[test]
fn sample_catalog_imports_every_row() {
    let catalog = sample_catalog();

    assert_eq!(catalog.len(), 8);
    let ids: Vec<&str> = catalog.iter().map(|course| course.id.as_str()).collect();
    assert_eq!(ids[0], "bsc-se-jkuat");
    assert_eq!(ids[7], "pharmacy-kmtc");

    let artisan = catalog.get("artisan-motor-kiambu").expect("artisan course");
    assert_eq!(artisan.level, ProgramLevel::Artisan);
    assert!(artisan.minimum_requirements.is_empty());

    let aviation = catalog.get("dip-aviation-easa").expect("aviation course");
    assert!(!aviation.sponsored);
    assert_eq!(aviation.institution_type, InstitutionType::Tvet);
    assert_eq!(aviation.minimum_requirements[0].min_grade, Grade::BMinus);
}

#[test]
fn sample_catalog_trends_and_tiers() {
    let catalog = sample_catalog();

    let expectations = [
        ("bsc-se-jkuat", Trend::Rising, Competitiveness::High),
        ("bed-arts-ku", Trend::Falling, Competitiveness::Low),
        ("agri-egerton", Trend::Stable, Competitiveness::Medium),
        ("dip-journalism-kimc", Trend::Rising, Competitiveness::Medium),
        ("cert-plumbing-nyeri", Trend::Stable, Competitiveness::Low),
        ("artisan-motor-kiambu", Trend::Falling, Competitiveness::Low),
        ("dip-aviation-easa", Trend::Rising, Competitiveness::VeryHigh),
        ("pharmacy-kmtc", Trend::Rising, Competitiveness::High),
    ];

    for (id, trend, tier) in expectations {
        let course = catalog.get(id).expect("course present");
        assert_eq!(course.cutoffs.trend(), trend, "{id}");
        assert_eq!(rate(course.cutoffs.latest, course.level), tier, "{id}");
    }
}

#[test]
fn catalog_file_loads_by_extension() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_catalog.csv");

    let catalog = CourseCatalog::from_path(&path).expect("csv file loads");

    assert_eq!(catalog.len(), sample_catalog().len());
}

#[test]
fn json_catalog_matches_serialized_courses() {
    let standard = CourseCatalog::standard();
    let json = serde_json::to_vec(standard.courses()).expect("courses serialize");

    let catalog = CourseCatalog::from_json_reader(json.as_slice()).expect("json imports");

    assert_eq!(catalog.courses(), standard.courses());
}

#[test]
fn truncated_rows_are_rejected() {
    let csv = "id,name,institution\nbsc-se-jkuat,BSc Software Engineering,JKUAT\n";

    let error = CourseCatalog::from_csv_reader(csv.as_bytes()).expect_err("missing columns");

    assert!(matches!(error, CatalogError::Csv(_)));
}
