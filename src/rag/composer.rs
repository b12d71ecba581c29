//! Answer orchestration
//!
//! One `ResponseComposer` is built at startup and shared by every request
//! handler. For each query it runs:
//!
//! 1. Location intent: answer with the canonical address document verbatim.
//! 2. Retrieval: top `max_sources` documents become the sources.
//! 3. Generation with a bounded timeout, or the keyword fallback when the
//!    provider is unavailable.
//! 4. Confidence scoring over the sources.
//!
//! Generation failures are absorbed at step 3. Anything else that goes wrong,
//! including a panic, turns into the fixed degraded response.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::confidence::score_confidence;
use super::fallback::fallback_response;
use super::prompt::{build_context, system_instruction};
use crate::config::ChatConfig;
use crate::context::{KnowledgeStore, Retriever};
use crate::llm::{AnswerGenerator, GenerationError};
use crate::types::{AnswerOrigin, ChatResponse, Document, FallbackReason};

/// Substrings of the lowercased query that signal a location question.
pub const LOCATION_INTENT_KEYWORDS: &[&str] = &[
    "location",
    "address",
    "where",
    "find",
    "directions",
    "map",
    "locate",
    "site",
    "venue",
    "place",
];

/// Unexpected failure inside the answer pipeline.
#[derive(Debug, Error)]
pub enum PipelineFault {
    #[error("Confidence score is not finite: {0}")]
    NonFiniteConfidence(f64),

    #[error("Answer pipeline panicked: {0}")]
    Panicked(String),

    #[error("No suggested questions configured")]
    NoSuggestedQuestions,
}

/// Composer settings taken from [`ChatConfig`].
#[derive(Debug, Clone)]
pub struct ComposerSettings {
    pub school_name: String,
    pub max_sources: usize,
    pub generation_timeout: Duration,
    pub suggested_questions: Vec<String>,
}

impl ComposerSettings {
    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            school_name: config.assistant.school_name.clone(),
            max_sources: config.assistant.max_sources,
            generation_timeout: Duration::from_secs(config.generation.timeout_secs),
            suggested_questions: config.assistant.suggested_questions.clone(),
        }
    }
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}

pub struct ResponseComposer {
    retriever: Retriever,
    generator: Arc<dyn AnswerGenerator>,
    settings: ComposerSettings,
}

impl ResponseComposer {
    pub fn new(
        store: Arc<KnowledgeStore>,
        generator: Arc<dyn AnswerGenerator>,
        settings: ComposerSettings,
    ) -> Self {
        info!(
            documents = store.len(),
            backend = generator.backend_name(),
            generation_configured = generator.is_configured(),
            max_sources = settings.max_sources,
            "Response composer ready"
        );
        Self {
            retriever: Retriever::new(store),
            generator,
            settings,
        }
    }

    pub fn store(&self) -> &KnowledgeStore {
        self.retriever.store()
    }

    pub fn generator(&self) -> &dyn AnswerGenerator {
        self.generator.as_ref()
    }

    /// Answer one query. Never fails: pipeline faults and panics come back
    /// as [`ChatResponse::degraded`].
    pub async fn answer(&self, query: &str) -> ChatResponse {
        match AssertUnwindSafe(self.run_pipeline(query)).catch_unwind().await {
            Ok(Ok(response)) => response,
            Ok(Err(fault)) => {
                error!(error = %fault, "Answer pipeline failed, returning degraded response");
                ChatResponse::degraded()
            }
            Err(payload) => {
                let fault = PipelineFault::Panicked(panic_message(payload.as_ref()));
                error!(error = %fault, "Answer pipeline failed, returning degraded response");
                ChatResponse::degraded()
            }
        }
    }

    /// Suggested opening questions.
    pub fn suggested_questions(&self) -> Result<&[String], PipelineFault> {
        if self.settings.suggested_questions.is_empty() {
            return Err(PipelineFault::NoSuggestedQuestions);
        }
        Ok(&self.settings.suggested_questions)
    }

    async fn run_pipeline(&self, query: &str) -> Result<ChatResponse, PipelineFault> {
        if has_location_intent(query) {
            if let Some(address) = self.store().address_document() {
                debug!(doc_id = %address.id, "Location intent, answering with canonical address");
                return Ok(ChatResponse {
                    answer: address.content.clone(),
                    sources: vec![address.clone()],
                    confidence: 1.0,
                    origin: AnswerOrigin::CanonicalAddress,
                });
            }
        }

        let sources: Vec<Document> = self
            .retriever
            .search(query)
            .into_iter()
            .take(self.settings.max_sources)
            .cloned()
            .collect();
        debug!(sources = sources.len(), "Retrieved sources");

        let (answer, origin) = match self.generate(query, &sources).await {
            Ok(text) => (text, AnswerOrigin::Generated),
            Err(e) => {
                let reason = e.reason();
                if reason == FallbackReason::MissingCredential {
                    debug!("No generation credential, using fallback answer");
                } else {
                    warn!(error = %e, reason = %reason, "Generation failed, using fallback answer");
                }
                (
                    fallback_response(query).to_string(),
                    AnswerOrigin::Fallback(reason),
                )
            }
        };

        let confidence = score_confidence(query, &sources);
        if !confidence.is_finite() {
            return Err(PipelineFault::NonFiniteConfidence(confidence));
        }

        Ok(ChatResponse {
            answer,
            sources,
            confidence,
            origin,
        })
    }

    async fn generate(&self, query: &str, sources: &[Document]) -> Result<String, GenerationError> {
        if !self.generator.is_configured() {
            return Err(GenerationError::MissingCredential);
        }

        let system = system_instruction(&self.settings.school_name, &build_context(sources));
        let limit = self.settings.generation_timeout;
        tokio::time::timeout(limit, self.generator.generate(&system, query))
            .await
            .map_err(|_| GenerationError::Timeout(limit))?
    }
}

/// Whether `query` asks where the school is.
pub fn has_location_intent(query: &str) -> bool {
    let query = query.to_lowercase();
    LOCATION_INTENT_KEYWORDS.iter().any(|k| query.contains(k))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
