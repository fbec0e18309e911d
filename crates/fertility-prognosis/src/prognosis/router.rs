use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::UserInput;
use super::evaluation::EvaluationState;
use super::factors::FactorKind;
use super::repository::{ReportRepository, RepositoryError};
use super::service::{PrognosisService, ServiceError};

/// Router builder exposing evaluation, retrieval and simulation endpoints.
pub fn prognosis_router<R>(service: Arc<PrognosisService<R>>) -> Router
where
    R: ReportRepository + 'static,
{
    Router::new()
        .route("/api/v1/prognosis/preview", post(preview_handler::<R>))
        .route("/api/v1/prognosis/evaluations", post(store_handler::<R>))
        .route(
            "/api/v1/prognosis/evaluations/:report_key",
            get(report_handler::<R>),
        )
        .route(
            "/api/v1/prognosis/evaluations/:report_key/simulations",
            post(simulate_handler::<R>),
        )
        .route(
            "/api/v1/prognosis/evaluations/:report_key/simulations/all",
            post(simulate_all_handler::<R>),
        )
        .route(
            "/api/v1/prognosis/evaluations/:report_key/improvements",
            get(improvements_handler::<R>),
        )
        .with_state(service)
}

/// Response body for a stored evaluation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEvaluationView {
    pub report_key: String,
    pub stored_at: chrono::DateTime<chrono::Utc>,
    pub evaluation: EvaluationState,
}

#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    pub factor: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

pub(crate) async fn preview_handler<R>(
    State(service): State<Arc<PrognosisService<R>>>,
    axum::Json(input): axum::Json<UserInput>,
) -> Response
where
    R: ReportRepository + 'static,
{
    let state = service.preview(&input);
    (StatusCode::OK, axum::Json(state)).into_response()
}

pub(crate) async fn store_handler<R>(
    State(service): State<Arc<PrognosisService<R>>>,
    axum::Json(input): axum::Json<UserInput>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.evaluate_and_store(&input) {
        Ok((stored, evaluation)) => {
            let view = StoredEvaluationView {
                report_key: stored.key,
                stored_at: stored.stored_at,
                evaluation,
            };
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(ServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "report already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<PrognosisService<R>>>,
    Path(report_key): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.load(&report_key) {
        Ok(state) => (StatusCode::OK, axum::Json(state)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn simulate_handler<R>(
    State(service): State<Arc<PrognosisService<R>>>,
    Path(report_key): Path<String>,
    axum::Json(request): axum::Json<SimulationRequest>,
) -> Response
where
    R: ReportRepository + 'static,
{
    let Some(kind) = FactorKind::parse(&request.factor) else {
        let payload = json!({
            "error": format!("unknown factor '{}'", request.factor),
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    };

    match service.simulate_factor(&report_key, kind, request.explanation) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn simulate_all_handler<R>(
    State(service): State<Arc<PrognosisService<R>>>,
    Path(report_key): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.simulate_all(&report_key) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn improvements_handler<R>(
    State(service): State<Arc<PrognosisService<R>>>,
    Path(report_key): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.improvements(&report_key) {
        Ok(ranked) => (StatusCode::OK, axum::Json(ranked)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ServiceError::CorruptReport { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Repository(RepositoryError::Unavailable(_))
        | ServiceError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
