//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! the chat and health endpoints using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port.

use buds_assist::api::{create_app, ChatState};
use buds_assist::config::defaults::FALLBACK_SUGGESTED_QUESTIONS;
use buds_assist::context::{KnowledgeStore, ADDRESS_DOCUMENT_ID};
use buds_assist::llm::{AnswerGenerator, GenerationError, Unconfigured};
use buds_assist::rag::{ComposerSettings, ResponseComposer};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

const MAX_BODY: usize = 16 * 1024;

/// Counts calls; always answers.
#[derive(Default)]
struct Counting {
    calls: AtomicUsize,
}

#[async_trait]
impl AnswerGenerator for Counting {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("generated".to_string())
    }
    fn is_configured(&self) -> bool {
        true
    }
    fn backend_name(&self) -> &'static str {
        "counting"
    }
}

struct Panicking;

#[async_trait]
impl AnswerGenerator for Panicking {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, GenerationError> {
        panic!("provider client bug");
    }
    fn is_configured(&self) -> bool {
        true
    }
    fn backend_name(&self) -> &'static str {
        "panicking"
    }
}

fn app_with(generator: Arc<dyn AnswerGenerator>, settings: ComposerSettings) -> Router {
    let composer = ResponseComposer::new(Arc::new(KnowledgeStore::builtin()), generator, settings);
    create_app(ChatState::new(Arc::new(composer)), MAX_BODY)
}

fn default_app() -> Router {
    app_with(Arc::new(Unconfigured), ComposerSettings::default())
}

fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Both mount points answer GET with the suggestion list.
#[tokio::test]
async fn test_get_chat_returns_suggestions() {
    for uri in ["/api/chat", "/chat"] {
        let resp = default_app().oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");

        let json = json_body(resp).await;
        let questions = json["suggestedQuestions"].as_array().unwrap();
        assert_eq!(questions.len(), 8);
        assert_eq!(questions[0], "What are the admission requirements?");
        assert!(json.get("error").is_none());
    }
}

/// An empty configured list turns into the 500 fallback shape.
#[tokio::test]
async fn test_get_chat_failure_returns_fixed_list() {
    let settings = ComposerSettings {
        suggested_questions: Vec::new(),
        ..ComposerSettings::default()
    };
    let resp = app_with(Arc::new(Unconfigured), settings)
        .oneshot(get("/api/chat"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(resp).await;
    assert_eq!(json["error"], "Internal server error");
    let questions = json["suggestedQuestions"].as_array().unwrap();
    assert_eq!(questions.len(), FALLBACK_SUGGESTED_QUESTIONS.len());
}

/// Non-string message: 400, no generation attempted.
#[tokio::test]
async fn test_post_non_string_message_rejected() {
    let generator = Arc::new(Counting::default());
    let app = app_with(generator.clone(), ComposerSettings::default());

    let resp = app
        .oneshot(post_json("/api/chat", r#"{ "message": 123 }"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = json_body(resp).await;
    assert_eq!(json["error"], "Message is required and must be a string");
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_post_missing_or_empty_message_rejected() {
    for body in ["{}", r#"{ "message": "" }"#, r#"{ "text": "hi" }"#] {
        let resp = default_app().oneshot(post_json("/chat", body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body {body}");
    }
}

#[tokio::test]
async fn test_post_malformed_json_rejected() {
    let resp = default_app()
        .oneshot(post_json("/api/chat", "{ not json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = json_body(resp).await;
    assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn test_post_oversized_body_rejected() {
    let message = "a".repeat(MAX_BODY + 1);
    let body = serde_json::json!({ "message": message }).to_string();
    let resp = default_app().oneshot(post_json("/api/chat", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

/// Location questions return the canonical address as the only source.
#[tokio::test]
async fn test_post_location_question() {
    let resp = default_app()
        .oneshot(post_json(
            "/api/chat",
            r#"{ "message": "Where is the school located?" }"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    let store = KnowledgeStore::builtin();
    let address = store.get(ADDRESS_DOCUMENT_ID).unwrap();
    assert_eq!(json["answer"], address.content.as_str());
    assert_eq!(json["confidence"], 1.0);
    let sources = json["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0]["id"], ADDRESS_DOCUMENT_ID);
}

/// Without a key the fee question is answered by the keyword rules.
#[tokio::test]
async fn test_post_fee_question_without_key() {
    let resp = default_app()
        .oneshot(post_json(
            "/chat",
            r#"{ "message": "What is the fee structure?" }"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    let answer = json["answer"].as_str().unwrap();
    assert!(answer.contains("PKR 4,000"));
    assert!(answer.contains("PKR 4,500"));
    let sources = json["sources"].as_array().unwrap();
    assert!(!sources.is_empty() && sources.len() <= 3);
    assert!(json["confidence"].as_f64().unwrap() > 0.0);
    assert!(json.get("origin").is_none());
}

/// A pipeline panic surfaces as 500 with the degraded answer fields.
#[tokio::test]
async fn test_post_degraded_answer_is_500() {
    let app = app_with(Arc::new(Panicking), ComposerSettings::default());
    let resp = app
        .oneshot(post_json(
            "/api/chat",
            r#"{ "message": "What is the fee structure?" }"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(resp).await;
    assert_eq!(json["error"], "Internal server error");
    assert!(json["answer"].as_str().unwrap().contains("+92 (51) 123-4567"));
    assert_eq!(json["sources"], serde_json::json!([]));
    assert_eq!(json["confidence"], 0.0);
}

#[tokio::test]
async fn test_health_reports_backend() {
    let resp = default_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["documents"], 20);
    assert_eq!(json["generation_backend"], "unconfigured");
    assert_eq!(json["generation_configured"], false);
    assert!(json["timestamp"].is_string());
}
