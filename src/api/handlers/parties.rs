//! Handlers for party endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::party::PartyDto;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or replaces) a party.
///
/// An `electionId` that does not resolve stores the party with a `null`
/// election reference rather than failing.
///
/// # Endpoint
///
/// `POST /api/parties`
pub async fn create_party_handler(
    State(state): State<AppState>,
    Json(payload): Json<PartyDto>,
) -> Result<(StatusCode, Json<PartyDto>), AppError> {
    let created = state.party_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Lists all parties.
///
/// # Endpoint
///
/// `GET /api/parties`
pub async fn party_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PartyDto>>, AppError> {
    Ok(Json(state.party_service.list_all().await?))
}

/// Retrieves a party by id; `null` body with 200 when absent.
///
/// # Endpoint
///
/// `GET /api/parties/{id}`
pub async fn get_party_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Option<PartyDto>>, AppError> {
    Ok(Json(state.party_service.get_by_id(id).await?))
}

/// Deletes a party by id. A missing id is still a success.
///
/// # Endpoint
///
/// `DELETE /api/parties/{id}`
pub async fn delete_party_handler(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.party_service.delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
