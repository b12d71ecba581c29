//! Answer generation backends
//!
//! The composer depends only on [`AnswerGenerator`]: a way to tell whether a
//! credential is configured, and one call that returns complete text or an
//! error. No streaming.
//!
//! - **TogetherClient**: OpenAI-compatible chat completions over HTTPS
//! - **Unconfigured**: stand-in used when no API key is set

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::types::FallbackReason;

mod together;

pub use together::TogetherClient;

/// Failure to obtain generated text. Always recovered by the fallback responder.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No generation API key configured")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed provider response: {0}")]
    Malformed(String),

    #[error("Generation timed out after {0:?}")]
    Timeout(Duration),
}

impl GenerationError {
    /// Coarse reason recorded on the fallback answer.
    pub fn reason(&self) -> FallbackReason {
        match self {
            Self::MissingCredential => FallbackReason::MissingCredential,
            Self::Timeout(_) => FallbackReason::Timeout,
            Self::Http(e) if e.is_timeout() => FallbackReason::Timeout,
            Self::Malformed(_) => FallbackReason::MalformedResponse,
            Self::Http(_) | Self::Status(_) => FallbackReason::ProviderFailure,
        }
    }
}

/// Remote text-generation collaborator.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Generate one assistant reply for a system instruction and user turn.
    async fn generate(&self, system: &str, user: &str) -> Result<String, GenerationError>;

    /// Whether a credential is configured. When false the composer skips
    /// straight to the fallback responder without calling `generate`.
    fn is_configured(&self) -> bool;

    /// Backend name for logging and health checks
    fn backend_name(&self) -> &'static str;
}

/// Generator used when no credential is available.
pub struct Unconfigured;

#[async_trait]
impl AnswerGenerator for Unconfigured {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, GenerationError> {
        Err(GenerationError::MissingCredential)
    }

    fn is_configured(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "unconfigured"
    }
}
