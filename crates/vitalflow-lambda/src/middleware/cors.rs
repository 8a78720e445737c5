use axum::http::HeaderName;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use tower_http::cors::{Any, CorsLayer};

/// Headers the web client sends along with its calls.
fn allowed_headers() -> [HeaderName; 4] {
    [
        AUTHORIZATION,
        HeaderName::from_static("x-client-info"),
        HeaderName::from_static("apikey"),
        CONTENT_TYPE,
    ]
}

/// Permissive CORS: any origin, any method, the client's headers.
///
/// Pre-flight `OPTIONS` requests are answered here and never reach a handler.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(allowed_headers())
}
