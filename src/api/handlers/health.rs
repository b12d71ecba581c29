//! `GET /health`.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ChatState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Documents in the knowledge store
    pub documents: usize,
    pub generation_backend: &'static str,
    /// False means every answer comes from the keyword fallback
    pub generation_configured: bool,
    pub timestamp: DateTime<Utc>,
}

pub async fn get_health(State(state): State<ChatState>) -> Json<HealthResponse> {
    let composer = &state.composer;
    Json(HealthResponse {
        status: "ok",
        documents: composer.store().len(),
        generation_backend: composer.generator().backend_name(),
        generation_configured: composer.generator().is_configured(),
        timestamp: Utc::now(),
    })
}
