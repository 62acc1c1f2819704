use crate::infra::{load_catalog, parse_level, parse_risk};
use clap::Args;
use course_placement::config::CatalogConfig;
use course_placement::error::AppError;
use course_placement::placement::{
    rate, CareerCluster, CourseCatalog, CourseResult, Grade, InstitutionPreference,
    LearningPreference, ProfileGuard, ProfileSubmission, ProgramLevel, RecommendationEngine,
    Recommendations, RiskAppetite, Sponsorship, SubjectGrade,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Headline picks shown before the rest of the shortlist.
const DEFAULT_TOP_PICKS: usize = 3;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// JSON file holding the student profile (grades, year, preferences)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Course catalog (.json or .csv). Defaults to PLACEMENT_CATALOG_PATH, then the built-in set.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Number of headline picks to highlight
    #[arg(long, default_value_t = DEFAULT_TOP_PICKS)]
    pub(crate) limit: usize,
    /// Print the full recommendation payload as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CoursesArgs {
    /// Course catalog (.json or .csv). Defaults to PLACEMENT_CATALOG_PATH, then the built-in set.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Only list courses at this level (degree, diploma, certificate, artisan)
    #[arg(long, value_parser = parse_level)]
    pub(crate) level: Option<ProgramLevel>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Course catalog (.json or .csv). Defaults to PLACEMENT_CATALOG_PATH, then the built-in set.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Override the sample student's risk appetite (safe, balanced, competitive)
    #[arg(long, value_parser = parse_risk)]
    pub(crate) risk: Option<RiskAppetite>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        profile,
        catalog,
        limit,
        json,
    } = args;

    let raw = std::fs::read_to_string(&profile)?;
    let submission: ProfileSubmission = serde_json::from_str(&raw)?;
    let catalog = cli_catalog(catalog)?;

    let warnings = submission.missing_compulsory_subjects();
    let profile = ProfileGuard::default().profile_from_submission(submission)?;
    let recommendations = RecommendationEngine::new(catalog).recommend(&profile)?;

    if json {
        let payload = serde_json::json!({
            "summary": recommendations.summary,
            "results": recommendations.results,
            "missing_compulsory_subjects": warnings,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    render_recommendations(&mut std::io::stdout().lock(), &recommendations, &warnings, limit)?;
    Ok(())
}

pub(crate) fn run_courses(args: CoursesArgs) -> Result<(), AppError> {
    let catalog = cli_catalog(args.catalog)?;

    println!("Course catalog ({} courses)", catalog.len());
    for course in catalog
        .iter()
        .filter(|course| args.level.map_or(true, |level| course.level == level))
    {
        let latest = course.cutoffs.latest;
        println!(
            "- {} [{}] {} @ {} ({}) | cutoff {:.1} | trend {} | competitiveness {}",
            course.id,
            course.level.label(),
            course.name,
            course.institution,
            course.institution_type.label(),
            latest,
            course.cutoffs.trend().label(),
            rate(latest, course.level).label()
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = cli_catalog(args.catalog)?;

    let mut submission = demo_submission();
    if let Some(risk) = args.risk {
        submission.risk_appetite = risk;
    }

    println!("Course placement demo");
    println!(
        "Sample student: KCSE {} | interests {} | risk appetite {}",
        submission.year,
        submission
            .career_interests
            .iter()
            .map(|cluster| cluster.label())
            .collect::<Vec<_>>()
            .join(", "),
        submission.risk_appetite.label()
    );
    println!(
        "Grades: {}",
        submission
            .grades
            .iter()
            .map(|entry| format!("{} {}", entry.subject, entry.grade))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let warnings = submission.missing_compulsory_subjects();
    let profile = ProfileGuard::default().profile_from_submission(submission)?;
    let recommendations = RecommendationEngine::new(catalog).recommend(&profile)?;

    render_recommendations(
        &mut std::io::stdout().lock(),
        &recommendations,
        &warnings,
        DEFAULT_TOP_PICKS,
    )?;
    Ok(())
}

fn cli_catalog(override_path: Option<PathBuf>) -> Result<Arc<CourseCatalog>, AppError> {
    let config = CatalogConfig::from_env()?;
    let catalog = load_catalog(&config, override_path.as_deref())?;
    Ok(Arc::new(catalog))
}

fn demo_submission() -> ProfileSubmission {
    ProfileSubmission {
        grades: vec![
            SubjectGrade::new("English", Grade::B),
            SubjectGrade::new("Kiswahili", Grade::BMinus),
            SubjectGrade::new("Mathematics", Grade::AMinus),
            SubjectGrade::new("Physics", Grade::BPlus),
            SubjectGrade::new("Chemistry", Grade::B),
            SubjectGrade::new("Biology", Grade::BMinus),
            SubjectGrade::new("Computer Studies", Grade::A),
        ],
        year: 2024,
        career_interests: vec![CareerCluster::Tech, CareerCluster::Engineering],
        learning_preference: LearningPreference::Practical,
        risk_appetite: RiskAppetite::Balanced,
        sponsorship: Sponsorship::Government,
        institution_type: InstitutionPreference::Any,
    }
}

fn render_recommendations<W: Write>(
    out: &mut W,
    recommendations: &Recommendations,
    warnings: &[&str],
    limit: usize,
) -> std::io::Result<()> {
    let summary = &recommendations.summary;

    writeln!(out, "\nSummary")?;
    writeln!(out, "  Mean score: {:.1}", summary.mean_score)?;
    writeln!(out, "  Courses shortlisted: {}", summary.total_courses)?;
    writeln!(
        out,
        "  High-probability courses: {}",
        summary.high_probability_count
    )?;
    if !warnings.is_empty() {
        writeln!(
            out,
            "  Warning: compulsory subjects missing ({}); cluster points exclude them",
            warnings.join(", ")
        )?;
    }

    if recommendations.is_empty() {
        writeln!(out, "\nNo courses match the selected preferences.")?;
        return Ok(());
    }

    let top = recommendations.top(limit);
    if !top.is_empty() {
        writeln!(out, "\nTop picks")?;
        for (index, result) in top.iter().enumerate() {
            write_result(out, index + 1, result)?;
        }
    }

    let remaining = recommendations.remaining(limit);
    if !remaining.is_empty() {
        let heading = if top.is_empty() { "Options" } else { "Other options" };
        writeln!(out, "\n{heading}")?;
        for (index, result) in remaining.iter().enumerate() {
            write_result(out, top.len() + index + 1, result)?;
        }
    }

    Ok(())
}

fn write_result<W: Write>(out: &mut W, rank: usize, result: &CourseResult) -> std::io::Result<()> {
    let course = &result.course;
    writeln!(
        out,
        "  {}. {} - {} ({}, {})",
        rank,
        course.name,
        course.institution,
        course.institution_type.label(),
        course.level.label()
    )?;
    writeln!(
        out,
        "     cluster points {:.1} vs cutoff {:.1} ({:+.1}) | probability {}% ({}) | trend {} | competitiveness {}{}",
        result.cluster_points,
        course.cutoffs.latest,
        result.margin(),
        result.probability,
        result.band().label(),
        result.trend.label(),
        result.competitiveness.label(),
        if result.interest_match {
            " | matches interests"
        } else {
            ""
        }
    )?;
    writeln!(
        out,
        "     employment {}% | salary KES {}-{} / month",
        course.employment_rate, course.salary_range.min, course.salary_range.max
    )
}
