//! Retrieval-augmented answering
//!
//! - **composer**: the per-query state machine
//! - **confidence**: lexical support score for an answer's sources
//! - **fallback**: keyword-rule answers when generation is unavailable
//! - **prompt**: context and system-instruction assembly

pub mod composer;
pub mod confidence;
pub mod fallback;
pub mod prompt;

pub use composer::{
    has_location_intent, ComposerSettings, PipelineFault, ResponseComposer,
    LOCATION_INTENT_KEYWORDS,
};
pub use confidence::score_confidence;
pub use fallback::{fallback_response, DEFAULT_FALLBACK};
pub use prompt::{build_context, system_instruction, EMPTY_CONTEXT};
