//! Chat answers and the tag recording how each answer was produced.

use serde::Serialize;
use std::fmt;

use super::Document;

/// Reply shown when the answer pipeline itself fails.
pub const DEGRADED_ANSWER: &str = "I apologize, but I'm having trouble processing your request right now. \
Please try again or contact our admissions team directly at +92 (51) 123-4567.";

/// Why the generation provider could not be used for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No API key configured
    MissingCredential,
    /// The provider did not answer within the configured timeout
    Timeout,
    /// Transport error or non-success HTTP status
    ProviderFailure,
    /// The provider answered without usable text
    MalformedResponse,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingCredential => "missing_credential",
            Self::Timeout => "timeout",
            Self::ProviderFailure => "provider_failure",
            Self::MalformedResponse => "malformed_response",
        };
        f.write_str(s)
    }
}

/// How a [`ChatResponse`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum AnswerOrigin {
    /// Location intent answered with the canonical address document verbatim
    CanonicalAddress,
    /// Text composed by the generation provider
    Generated,
    /// Keyword rule answer used because generation was unavailable
    Fallback(FallbackReason),
    /// The pipeline failed and the fixed apology was returned
    Degraded,
}

impl AnswerOrigin {
    pub const fn is_degraded(self) -> bool {
        matches!(self, Self::Degraded)
    }
}

/// Answer returned to the caller for a single chat query.
///
/// Serialises to `{ answer, sources, confidence }`. The origin tag stays
/// server-side so callers and tests can tell failure classes apart without
/// parsing the answer text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub sources: Vec<Document>,
    /// Heuristic lexical support in [0, 1]
    pub confidence: f64,
    #[serde(skip)]
    pub origin: AnswerOrigin,
}

impl ChatResponse {
    /// The fixed degraded response: apology, no sources, zero confidence.
    pub fn degraded() -> Self {
        Self {
            answer: DEGRADED_ANSWER.to_string(),
            sources: Vec::new(),
            confidence: 0.0,
            origin: AnswerOrigin::Degraded,
        }
    }
}
