use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::{ConditionsQuery, PlantId};
use super::repository::{PlantFilter, PlantRepository, RepositoryError};
use super::service::{RecommendationService, RecommendationServiceError};

/// Router builder exposing the catalog and recommendation endpoints.
pub fn plant_router<R>(service: Arc<RecommendationService<R>>) -> Router
where
    R: PlantRepository + 'static,
{
    Router::new()
        .route("/api/v1/recommendations", get(recommend_handler::<R>))
        .route("/api/v1/plants", get(list_handler::<R>))
        .route("/api/v1/plants/:plant_id", get(plant_handler::<R>))
        .route(
            "/api/v1/plants/category/:category",
            get(category_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn recommend_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
    Query(query): Query<ConditionsQuery>,
) -> Response
where
    R: PlantRepository + 'static,
{
    match service.recommend(&query) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(RecommendationServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
                "fields": error.fields(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
    Query(filter): Query<PlantFilter>,
) -> Response
where
    R: PlantRepository + 'static,
{
    match service.list(&filter) {
        Ok(plants) => (StatusCode::OK, axum::Json(plants)).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn plant_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
    Path(plant_id): Path<String>,
) -> Response
where
    R: PlantRepository + 'static,
{
    match service.plant(&PlantId(plant_id)) {
        Ok(plant) => (StatusCode::OK, axum::Json(plant)).into_response(),
        Err(RecommendationServiceError::Repository(RepositoryError::NotFound)) => {
            not_found("Plant not found")
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn category_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
    Path(category): Path<String>,
) -> Response
where
    R: PlantRepository + 'static,
{
    match service.by_category(&category) {
        Ok(plants) => (StatusCode::OK, axum::Json(plants)).into_response(),
        Err(RecommendationServiceError::Repository(RepositoryError::NotFound)) => {
            not_found("Category not found")
        }
        Err(other) => internal_error(other),
    }
}

fn not_found(message: &str) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error(error: RecommendationServiceError) -> Response {
    warn!(%error, "plant catalog request failed");
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
