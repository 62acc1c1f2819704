use course_placement::config::CatalogConfig;
use course_placement::error::AppError;
use course_placement::placement::{CourseCatalog, ProgramLevel, RiskAppetite};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolve the catalog: an explicit path wins, then the configured path, then the built-in set.
pub(crate) fn load_catalog(
    config: &CatalogConfig,
    override_path: Option<&Path>,
) -> Result<CourseCatalog, AppError> {
    match override_path.or(config.path.as_deref()) {
        Some(path) => Ok(CourseCatalog::from_path(path)?),
        None => {
            let catalog = CourseCatalog::standard();
            info!(courses = catalog.len(), "using built-in course catalog");
            Ok(catalog)
        }
    }
}

pub(crate) fn parse_level(raw: &str) -> Result<ProgramLevel, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "degree" => Ok(ProgramLevel::Degree),
        "diploma" => Ok(ProgramLevel::Diploma),
        "certificate" => Ok(ProgramLevel::Certificate),
        "artisan" => Ok(ProgramLevel::Artisan),
        other => Err(format!(
            "'{other}' is not a program level (degree, diploma, certificate, artisan)"
        )),
    }
}

pub(crate) fn parse_risk(raw: &str) -> Result<RiskAppetite, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "safe" => Ok(RiskAppetite::Safe),
        "balanced" => Ok(RiskAppetite::Balanced),
        "competitive" => Ok(RiskAppetite::Competitive),
        other => Err(format!(
            "'{other}' is not a risk appetite (safe, balanced, competitive)"
        )),
    }
}
