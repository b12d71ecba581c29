//! `POST /chat` and `GET /chat`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

use super::ChatState;
use crate::api::envelope::{ApiError, INTERNAL_ERROR};
use crate::config::defaults::FALLBACK_SUGGESTED_QUESTIONS;
use crate::types::ChatResponse;

/// 500 body for a degraded answer: the apology plus the normal answer fields.
#[derive(Debug, Serialize)]
pub struct DegradedChatBody {
    pub error: &'static str,
    #[serde(flatten)]
    pub response: ChatResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub suggested_questions: Vec<String>,
}

/// Pull a non-empty string `message` out of the request body.
fn extract_message(payload: Result<Json<Value>, JsonRejection>) -> Result<String, ApiError> {
    let Json(body) = payload?;
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .ok_or(ApiError::InvalidMessage)
}

/// Answer one chat message.
pub async fn post_chat(
    State(state): State<ChatState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4();
    async move {
        let message = match extract_message(payload) {
            Ok(m) => m,
            Err(e) => {
                debug!(status = %e.status(), "Rejected chat request");
                return e.into_response();
            }
        };

        let response = state.composer.answer(&message).await;
        info!(
            origin = ?response.origin,
            sources = response.sources.len(),
            confidence = response.confidence,
            "Chat answered"
        );

        if response.origin.is_degraded() {
            let body = DegradedChatBody {
                error: INTERNAL_ERROR,
                response,
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }
        Json(response).into_response()
    }
    .instrument(info_span!("chat", %request_id))
    .await
}

/// Suggested opening questions.
pub async fn get_suggestions(State(state): State<ChatState>) -> Response {
    match state.composer.suggested_questions() {
        Ok(questions) => Json(SuggestionsBody {
            error: None,
            suggested_questions: questions.to_vec(),
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list suggested questions");
            let body = SuggestionsBody {
                error: Some(INTERNAL_ERROR),
                suggested_questions: FALLBACK_SUGGESTED_QUESTIONS
                    .iter()
                    .map(|q| (*q).to_string())
                    .collect(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
