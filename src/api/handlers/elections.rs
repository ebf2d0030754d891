//! Handlers for election endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::election::ElectionDto;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or replaces) an election.
///
/// # Endpoint
///
/// `POST /api/elections`
pub async fn create_election_handler(
    State(state): State<AppState>,
    Json(payload): Json<ElectionDto>,
) -> Result<(StatusCode, Json<ElectionDto>), AppError> {
    let created = state.election_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Lists all elections.
///
/// # Endpoint
///
/// `GET /api/elections`
pub async fn election_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ElectionDto>>, AppError> {
    Ok(Json(state.election_service.list_all().await?))
}

/// Retrieves an election by id; `null` body with 200 when absent.
///
/// # Endpoint
///
/// `GET /api/elections/{id}`
pub async fn get_election_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Option<ElectionDto>>, AppError> {
    Ok(Json(state.election_service.get_by_id(id).await?))
}

/// Deletes an election by id. A missing id is still a success.
///
/// # Endpoint
///
/// `DELETE /api/elections/{id}`
pub async fn delete_election_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.election_service.delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
