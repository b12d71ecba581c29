//! Buds Assist: admissions chat for the Buds School System
//!
//! Retrieval-augmented answering over a small, read-only school knowledge
//! base.
//!
//! ## Architecture
//!
//! - **context**: knowledge store and keyword retriever
//! - **rag**: confidence scoring, keyword fallback, answer composition
//! - **llm**: generation provider contract and the Together AI client
//! - **api**: axum router for the chat and health endpoints
//! - **config**: TOML configuration with defaults and validation

pub mod api;
pub mod config;
pub mod context;
pub mod llm;
pub mod rag;
pub mod types;

pub use config::ChatConfig;
pub use context::{KnowledgeStore, Retriever};
pub use llm::{AnswerGenerator, GenerationError, TogetherClient, Unconfigured};
pub use rag::{ComposerSettings, PipelineFault, ResponseComposer};
pub use types::{AnswerOrigin, ChatResponse, Document, DocumentCategory, FallbackReason};
