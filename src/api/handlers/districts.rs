//! Handlers for district endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::district::DistrictDto;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or replaces) a district.
///
/// A `provinceId` that does not resolve stores the district with a `null`
/// province reference rather than failing.
///
/// # Endpoint
///
/// `POST /api/districts`
pub async fn create_district_handler(
    State(state): State<AppState>,
    Json(payload): Json<DistrictDto>,
) -> Result<(StatusCode, Json<DistrictDto>), AppError> {
    let created = state.district_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Lists all districts.
///
/// # Endpoint
///
/// `GET /api/districts`
pub async fn district_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DistrictDto>>, AppError> {
    Ok(Json(state.district_service.list_all().await?))
}

/// Retrieves a district by id; `null` body with 200 when absent.
///
/// # Endpoint
///
/// `GET /api/districts/{id}`
pub async fn get_district_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Option<DistrictDto>>, AppError> {
    Ok(Json(state.district_service.get_by_id(id).await?))
}

/// Deletes a district by id. A missing id is still a success.
///
/// # Endpoint
///
/// `DELETE /api/districts/{id}`
pub async fn delete_district_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.district_service.delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
