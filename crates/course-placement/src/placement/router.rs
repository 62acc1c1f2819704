use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::domain::{CareerCluster, InstitutionType, ProgramLevel};
use super::engine::RecommendationEngine;
use super::profile::{ProfileGuard, ProfileSubmission};
use super::scoring::{rate, Competitiveness, Trend};

/// Shared state behind the placement endpoints.
#[derive(Debug, Clone)]
pub struct PlacementState {
    pub engine: Arc<RecommendationEngine>,
    pub guard: Arc<ProfileGuard>,
}

impl PlacementState {
    pub fn new(engine: Arc<RecommendationEngine>) -> Self {
        Self {
            engine,
            guard: Arc::new(ProfileGuard::default()),
        }
    }
}

/// Catalog entry as listed to clients, with the student-independent ratings attached.
#[derive(Debug, Clone, Serialize)]
pub struct CourseOverview {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub institution_type: InstitutionType,
    pub level: ProgramLevel,
    pub cluster: CareerCluster,
    pub latest_cutoff: f64,
    pub trend: Trend,
    pub competitiveness: Competitiveness,
    pub sponsored: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClusterView {
    pub id: &'static str,
    pub label: &'static str,
}

/// Router builder exposing the recommendation and catalog endpoints.
pub fn placement_router(state: PlacementState) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/courses", get(courses_handler))
        .route("/api/v1/courses/:course_id", get(course_handler))
        .route("/api/v1/clusters", get(clusters_handler))
        .with_state(state)
}

pub(crate) async fn recommend_handler(
    State(state): State<PlacementState>,
    payload: Result<Json<ProfileSubmission>, JsonRejection>,
) -> Response {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "unreadable profile submission");
            let payload = json!({ "error": rejection.body_text() });
            return (rejection.status(), Json(payload)).into_response();
        }
    };

    let warnings = submission.missing_compulsory_subjects();
    let profile = match state.guard.profile_from_submission(submission) {
        Ok(profile) => profile,
        Err(error) => {
            warn!(%error, "rejected profile submission");
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    match state.engine.recommend(&profile) {
        Ok(recommendations) => {
            let payload = json!({
                "summary": recommendations.summary,
                "results": recommendations.results,
                "missing_compulsory_subjects": warnings,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn courses_handler(State(state): State<PlacementState>) -> Response {
    let overview: Vec<CourseOverview> = state
        .engine
        .catalog()
        .iter()
        .map(|course| CourseOverview {
            id: course.id.clone(),
            name: course.name.clone(),
            institution: course.institution.clone(),
            institution_type: course.institution_type,
            level: course.level,
            cluster: course.cluster,
            latest_cutoff: course.cutoffs.latest,
            trend: course.cutoffs.trend(),
            competitiveness: rate(course.cutoffs.latest, course.level),
            sponsored: course.sponsored,
        })
        .collect();

    (StatusCode::OK, Json(overview)).into_response()
}

pub(crate) async fn course_handler(
    State(state): State<PlacementState>,
    Path(course_id): Path<String>,
) -> Response {
    match state.engine.catalog().get(&course_id) {
        Some(course) => (StatusCode::OK, Json(course.clone())).into_response(),
        None => {
            let payload = json!({
                "error": format!("course {course_id} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn clusters_handler() -> Json<Vec<ClusterView>> {
    Json(
        CareerCluster::ordered()
            .into_iter()
            .map(|cluster| ClusterView {
                id: cluster.id(),
                label: cluster.label(),
            })
            .collect(),
    )
}
