//! Answer Pipeline Tests
//!
//! Drive `ResponseComposer` end to end over the built-in knowledge base and
//! over a knowledge file, with generator doubles standing in for the
//! provider.

use buds_assist::context::{KnowledgeStore, Retriever, ADDRESS_DOCUMENT_ID};
use buds_assist::llm::{AnswerGenerator, GenerationError, Unconfigured};
use buds_assist::rag::{
    fallback_response, score_confidence, ComposerSettings, ResponseComposer, DEFAULT_FALLBACK,
};
use buds_assist::types::{AnswerOrigin, FallbackReason};

use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;

struct Failing;

#[async_trait]
impl AnswerGenerator for Failing {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Status(reqwest::StatusCode::BAD_GATEWAY))
    }
    fn is_configured(&self) -> bool {
        true
    }
    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

/// Echoes the system instruction so tests can inspect the prompt.
struct EchoSystem;

#[async_trait]
impl AnswerGenerator for EchoSystem {
    async fn generate(&self, system: &str, _user: &str) -> Result<String, GenerationError> {
        Ok(system.to_string())
    }
    fn is_configured(&self) -> bool {
        true
    }
    fn backend_name(&self) -> &'static str {
        "echo"
    }
}

fn composer(generator: Arc<dyn AnswerGenerator>) -> ResponseComposer {
    ResponseComposer::new(
        Arc::new(KnowledgeStore::builtin()),
        generator,
        ComposerSettings::default(),
    )
}

#[tokio::test]
async fn fee_question_without_credential_uses_fee_rule() {
    let resp = composer(Arc::new(Unconfigured))
        .answer("What is the fee structure?")
        .await;

    assert!(resp.answer.contains("PKR 4,000"));
    assert!(resp.answer.contains("PKR 4,500"));
    assert!(!resp.sources.is_empty());
    assert!(resp.confidence > 0.0);
    assert_eq!(
        resp.origin,
        AnswerOrigin::Fallback(FallbackReason::MissingCredential)
    );
}

#[tokio::test]
async fn location_question_returns_canonical_address() {
    let c = composer(Arc::new(EchoSystem));
    let resp = c.answer("Where is the school located?").await;
    let address = c.store().get(ADDRESS_DOCUMENT_ID).unwrap();

    assert_eq!(resp.answer, address.content);
    assert_eq!(resp.sources.len(), 1);
    assert_eq!(resp.sources[0].id, ADDRESS_DOCUMENT_ID);
    assert_eq!(resp.confidence, 1.0);
    assert_eq!(resp.origin, AnswerOrigin::CanonicalAddress);
}

#[tokio::test]
async fn empty_query_gets_default_fallback() {
    let c = composer(Arc::new(Unconfigured));
    assert!(Retriever::new(Arc::new(KnowledgeStore::builtin()))
        .search("")
        .is_empty());

    let resp = c.answer("").await;
    assert_eq!(resp.answer, DEFAULT_FALLBACK);
    assert!(resp.sources.is_empty());
    assert_eq!(resp.confidence, 0.0);
}

#[tokio::test]
async fn generation_failure_routes_to_fallback_not_degraded() {
    let query = "How do I apply for admission?";
    let resp = composer(Arc::new(Failing)).answer(query).await;

    assert_eq!(resp.answer, fallback_response(query));
    assert_eq!(
        resp.origin,
        AnswerOrigin::Fallback(FallbackReason::ProviderFailure)
    );
    assert!(!resp.origin.is_degraded());
}

#[tokio::test]
async fn prompt_carries_numbered_context() {
    let resp = composer(Arc::new(EchoSystem))
        .answer("What is the fee structure?")
        .await;

    assert_eq!(resp.origin, AnswerOrigin::Generated);
    assert!(resp
        .answer
        .starts_with("You are a helpful admissions assistant for Buds School System."));
    assert!(resp.answer.contains("Context: Document 1 ("));
    assert!(!resp.answer.contains("Document 4 ("));
}

#[tokio::test]
async fn answers_are_deterministic_without_generation() {
    let c = composer(Arc::new(Unconfigured));
    for q in ["What documents do I need?", "Can I schedule a campus visit?", "deadline"] {
        let a = c.answer(q).await;
        let b = c.answer(q).await;
        assert_eq!(a, b, "{q}");
        assert_eq!(a.confidence, score_confidence(q, &a.sources));
    }
}

#[tokio::test]
async fn knowledge_file_without_address_disables_location_shortcut() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[documents]]
id = "fees"
content = "Monthly fee is PKR 5,000."
category = "fees"
tags = ["Fee", "Monthly"]

[[documents]]
id = "visit"
content = "Visits are on weekdays."
category = "campus"
tags = ["visit", "tour"]
"#
    )
    .unwrap();

    let store = KnowledgeStore::from_toml_file(file.path()).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.address_document().is_none());

    let c = ResponseComposer::new(
        Arc::new(store),
        Arc::new(Unconfigured),
        ComposerSettings::default(),
    );
    let resp = c.answer("where can I find the monthly fee").await;
    assert_ne!(resp.origin, AnswerOrigin::CanonicalAddress);
    assert_eq!(resp.sources[0].id, "fees");
    assert_eq!(resp.sources[0].tags, vec!["fee", "monthly"]);
}
