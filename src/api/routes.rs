//! API route definitions
//!
//! - /chat   GET suggested questions, POST a question
//! - /health liveness and generation backend status

use axum::{routing::get, Router};

use super::handlers::{self, ChatState};

/// Chat endpoints, mounted both at the root and under `/api`.
pub fn chat_routes(state: ChatState) -> Router {
    Router::new()
        .route(
            "/chat",
            get(handlers::get_suggestions).post(handlers::post_chat),
        )
        .with_state(state)
}

pub fn health_routes(state: ChatState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .with_state(state)
}
