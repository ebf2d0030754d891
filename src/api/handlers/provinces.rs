//! Handlers for province endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::province::{ProvinceDto, UpdateProvinceRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or replaces) a province.
///
/// # Endpoint
///
/// `POST /api/provinces`
pub async fn create_province_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProvinceDto>,
) -> Result<(StatusCode, Json<ProvinceDto>), AppError> {
    let created = state.province_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Lists all provinces.
///
/// # Endpoint
///
/// `GET /api/provinces`
pub async fn province_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProvinceDto>>, AppError> {
    Ok(Json(state.province_service.list_all().await?))
}

/// Retrieves a province by id.
///
/// An unknown id yields a `null` body with 200, not a 404. Absence is a
/// value on this surface.
///
/// # Endpoint
///
/// `GET /api/provinces/{id}`
pub async fn get_province_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Option<ProvinceDto>>, AppError> {
    Ok(Json(state.province_service.get_by_id(id).await?))
}

/// Overwrites the mutable fields of an existing province.
///
/// Province is the only entity with an update endpoint.
///
/// # Endpoint
///
/// `PUT /api/provinces/{id}`
///
/// # Errors
///
/// Returns 404 if the province does not exist.
pub async fn update_province_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProvinceRequest>,
) -> Result<Json<ProvinceDto>, AppError> {
    let updated = state.province_service.update(id, payload).await?;

    Ok(Json(updated))
}

/// Deletes a province by id. A missing id is still a success.
///
/// # Endpoint
///
/// `DELETE /api/provinces/{id}`
pub async fn delete_province_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.province_service.delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
