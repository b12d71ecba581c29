//! API route handlers
//!
//! - `chat`: answer a question, list suggested questions
//! - `health`: liveness and backend status

mod chat;
mod health;

pub use chat::*;
pub use health::*;

use std::sync::Arc;

use crate::rag::ResponseComposer;

/// Shared state for API handlers
#[derive(Clone)]
pub struct ChatState {
    /// The single composer built at startup
    pub composer: Arc<ResponseComposer>,
}

impl ChatState {
    pub fn new(composer: Arc<ResponseComposer>) -> Self {
        Self { composer }
    }
}
