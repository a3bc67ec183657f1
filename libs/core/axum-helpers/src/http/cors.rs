use tower_http::cors::{Any, CorsLayer};

/// CORS layer accepting any origin, method and header.
///
/// The browser frontend is served from a different origin than the API and
/// sends no credentials.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
