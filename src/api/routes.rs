//! API route configuration.

use crate::api::handlers::{
    create_district_handler, create_election_handler, create_party_handler,
    create_province_handler, delete_district_handler, delete_election_handler,
    delete_party_handler, delete_province_handler, district_list_handler, election_list_handler,
    get_district_handler, get_election_handler, get_party_handler, get_province_handler,
    party_list_handler, province_list_handler, update_province_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All API routes, one resource path per entity.
///
/// # Endpoints
///
/// - `POST   /provinces`       - Create (upsert) a province
/// - `GET    /provinces`       - List provinces
/// - `GET    /provinces/{id}`  - Province by id, or `null`
/// - `PUT    /provinces/{id}`  - Update a province (the only update path)
/// - `DELETE /provinces/{id}`  - Delete a province
/// - `POST   /districts`, `GET /districts`, `GET/DELETE /districts/{id}`
/// - `POST   /elections`, `GET /elections`, `GET/DELETE /elections/{id}`
/// - `POST   /parties`, `GET /parties`, `GET/DELETE /parties/{id}`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/provinces",
            get(province_list_handler).post(create_province_handler),
        )
        .route(
            "/provinces/{id}",
            get(get_province_handler)
                .put(update_province_handler)
                .delete(delete_province_handler),
        )
        .route(
            "/districts",
            get(district_list_handler).post(create_district_handler),
        )
        .route(
            "/districts/{id}",
            get(get_district_handler).delete(delete_district_handler),
        )
        .route(
            "/elections",
            get(election_list_handler).post(create_election_handler),
        )
        .route(
            "/elections/{id}",
            get(get_election_handler).delete(delete_election_handler),
        )
        .route(
            "/parties",
            get(party_list_handler).post(create_party_handler),
        )
        .route(
            "/parties/{id}",
            delete(delete_party_handler).get(get_party_handler),
        )
}
