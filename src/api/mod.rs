//! REST API module using Axum
//!
//! Serves the admissions chat for the school website:
//! - `POST /api/chat`, `GET /api/chat` (also mounted at `/chat`)
//! - `GET /health`

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::ChatState;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Environment variable listing cross-origin callers, comma separated.
pub const CORS_ORIGINS_ENV_VAR: &str = "BUDS_CORS_ORIGINS";

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `BUDS_CORS_ORIGINS` to a comma-separated list of allowed origins
/// when the site frontend is served from another host.
fn build_cors_layer() -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match std::env::var(CORS_ORIGINS_ENV_VAR) {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            base.allow_origin(allowed)
        }
        Err(_) => base,
    }
}

/// Create the application router.
///
/// Request bodies above `max_body_bytes` are rejected with 413.
pub fn create_app(state: ChatState, max_body_bytes: usize) -> Router {
    let cors = build_cors_layer();

    Router::new()
        .nest("/api", routes::chat_routes(state.clone()))
        .merge(routes::chat_routes(state.clone()))
        .merge(routes::health_routes(state))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
