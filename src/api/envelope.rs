//! Error bodies for the chat endpoints.
//!
//! Every error response is `{ "error": "<message>" }` with a matching
//! status code. The degraded chat answer and the suggestion fallback carry
//! extra fields and are built in their handlers.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Message for a missing, empty, or non-string `message` field.
pub const INVALID_MESSAGE: &str = "Message is required and must be a string";

/// Generic message for 500 responses.
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Request errors reported to the caller.
#[derive(Debug)]
pub enum ApiError {
    /// `message` missing, empty, or not a string
    InvalidMessage,
    /// Body is not valid JSON
    InvalidJson(String),
    /// Body larger than the configured limit
    PayloadTooLarge,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidMessage | Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::InvalidMessage => INVALID_MESSAGE.to_string(),
            Self::InvalidJson(detail) => format!("Invalid JSON body: {detail}"),
            Self::PayloadTooLarge => "Request body too large".to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::InvalidJson(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
