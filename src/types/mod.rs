//! Shared data types for the admissions assistant.
//!
//! - [`Document`] / [`DocumentCategory`]: knowledge base entries
//! - [`ChatResponse`]: answer, sources and confidence for one query
//! - [`AnswerOrigin`] / [`FallbackReason`]: how an answer was produced

mod document;
mod response;

pub use document::{Document, DocumentCategory};
pub use response::{AnswerOrigin, ChatResponse, FallbackReason, DEGRADED_ANSWER};
