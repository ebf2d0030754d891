//! Permissive CORS middleware.

use tower_http::cors::{Any, CorsLayer};

/// Creates a CORS layer permitting requests from any origin.
///
/// The reference data is served to browser frontends hosted elsewhere;
/// every endpoint accepts cross-origin requests with any method and headers.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
