//! System-wide default constants.
//!
//! Grouped by subsystem. Values that operators may tune also appear as
//! config fields; the constants here are their defaults.

// ============================================================================
// Server
// ============================================================================

/// Default HTTP bind address.
pub const SERVER_ADDR: &str = "0.0.0.0:8080";

/// Largest accepted chat request body (bytes).
pub const MAX_BODY_BYTES: usize = 16 * 1024;

// ============================================================================
// Retrieval & Scoring
// ============================================================================

/// Number of retrieved documents passed on as sources.
pub const MAX_SOURCES: usize = 3;

/// Weight of a query term found in a source's content words.
pub const CONTENT_MATCH_WEIGHT: f64 = 2.0;

/// Weight of a query term found in a source's tag words.
pub const TAG_MATCH_WEIGHT: f64 = 3.0;

/// Per-term, per-document normaliser for the confidence score.
///
/// Equal to the sum of both weights, so one document matching every term in
/// both content and tags scores exactly 1.0.
pub const CONFIDENCE_NORMALIZER: f64 = 5.0;

// ============================================================================
// Generation Provider
// ============================================================================

/// OpenAI-compatible Together AI endpoint.
pub const GENERATION_BASE_URL: &str = "https://api.together.xyz/v1";

pub const GENERATION_MODEL: &str = "meta-llama/Llama-3-8b-chat-hf";

pub const GENERATION_TEMPERATURE: f64 = 0.7;

pub const GENERATION_MAX_TOKENS: u32 = 1024;

/// Maximum time to wait for one generation call before falling back (seconds).
pub const GENERATION_TIMEOUT_SECS: u64 = 30;

/// Environment variables checked, in order, for the provider API key.
pub const API_KEY_ENV_VARS: &[&str] = &["LLAMA3_API_KEY", "TOGETHER_API_KEY"];

// ============================================================================
// Assistant
// ============================================================================

pub const SCHOOL_NAME: &str = "Buds School System";

/// Suggested questions offered by `GET /chat`.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What are the admission requirements?",
    "What is the fee structure?",
    "When is the next admission cycle?",
    "How do I apply online?",
    "What documents do I need?",
    "Can I schedule a campus visit?",
    "What payment plans are available?",
    "How long does the admission process take?",
];

/// Returned with a 500 when the suggestion list cannot be produced.
pub const FALLBACK_SUGGESTED_QUESTIONS: [&str; 4] = [
    "What are the admission requirements?",
    "What is the fee structure?",
    "When is the next admission cycle?",
    "How do I apply online?",
];
