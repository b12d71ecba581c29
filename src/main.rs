//! Buds Assist - admissions chat service for the Buds School System website
//!
//! Answers parent questions from the school knowledge base, using a hosted
//! LLM when a key is configured and keyword rules when it is not.
//!
//! # Usage
//!
//! ```bash
//! # Serve the chat API on 0.0.0.0:8080
//! cargo run --release
//!
//! # One question from the terminal
//! cargo run --release -- ask "What is the fee structure?"
//!
//! # Custom knowledge file and bind address
//! ./buds-assist --knowledge kb.toml --addr 127.0.0.1:3000
//! ```
//!
//! # Environment Variables
//!
//! - `LLAMA3_API_KEY` / `TOGETHER_API_KEY`: generation provider key
//! - `BUDS_CONFIG`: path to a `buds_config.toml`
//! - `BUDS_SERVER_ADDR`: bind address override
//! - `BUDS_CORS_ORIGINS`: comma-separated allowed origins
//! - `BUDS_LOG_FORMAT`: `json` for JSON log lines
//! - `RUST_LOG`: logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use buds_assist::api::{create_app, ChatState};
use buds_assist::config::ChatConfig;
use buds_assist::context::KnowledgeStore;
use buds_assist::llm::{AnswerGenerator, TogetherClient, Unconfigured};
use buds_assist::rag::{ComposerSettings, ResponseComposer};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "buds-assist")]
#[command(about = "Buds School System admissions assistant")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long, env = "BUDS_SERVER_ADDR")]
    addr: Option<String>,

    /// Load this config file instead of the default search order.
    /// Errors in the file are fatal.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Knowledge file of [[documents]] tables (default: built-in documents)
    #[arg(long, value_name = "PATH")]
    knowledge: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Run the HTTP chat server (default)
    Serve,

    /// Answer a single question and print the response as JSON
    Ask {
        /// The question, as a parent would type it
        question: String,
    },
}

// ============================================================================
// Startup
// ============================================================================

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let json = std::env::var("BUDS_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(args: &CliArgs) -> Result<ChatConfig> {
    match &args.config {
        Some(path) => ChatConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(ChatConfig::load()),
    }
}

fn load_store(args: &CliArgs, config: &ChatConfig) -> Result<KnowledgeStore> {
    let path = args.knowledge.as_ref().or(config.knowledge.path.as_ref());
    match path {
        Some(path) => KnowledgeStore::from_toml_file(path)
            .with_context(|| format!("Failed to load knowledge file {}", path.display())),
        None => {
            let store = KnowledgeStore::builtin();
            info!(documents = store.len(), "Using built-in knowledge base");
            Ok(store)
        }
    }
}

fn build_generator(config: &ChatConfig) -> Result<Arc<dyn AnswerGenerator>> {
    match config.generation.resolve_api_key() {
        Some(key) => {
            let client = TogetherClient::new(&config.generation, Some(key))
                .context("Failed to build generation client")?;
            info!(model = client.model(), base_url = %config.generation.base_url, "Generation enabled");
            Ok(Arc::new(client))
        }
        None => {
            info!("No LLAMA3_API_KEY or TOGETHER_API_KEY set, answers will use keyword rules");
            Ok(Arc::new(Unconfigured))
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

async fn run_ask(composer: &ResponseComposer, question: &str) -> Result<()> {
    let response = composer.answer(question).await;
    let mut out = serde_json::to_value(&response).context("Failed to serialize response")?;
    out["origin"] = serde_json::to_value(response.origin).context("Failed to serialize origin")?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

async fn run_server(composer: Arc<ResponseComposer>, addr: &str, max_body_bytes: usize) -> Result<()> {
    let app = create_app(ChatState::new(composer), max_body_bytes);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    info!("HTTP server listening on {}", addr);

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await
        .context("HTTP server error")?;

    info!("Graceful shutdown complete");
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so RUST_LOG and API keys from it take effect
    let dotenv = dotenvy::dotenv();
    init_logging();
    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to read .env"),
    }

    let args = CliArgs::parse();
    let config = load_config(&args)?;
    let store = Arc::new(load_store(&args, &config)?);
    let generator = build_generator(&config)?;
    let composer = Arc::new(ResponseComposer::new(
        store,
        generator,
        ComposerSettings::from_config(&config),
    ));

    match args.command {
        Some(SubCommand::Ask { ref question }) => run_ask(&composer, question).await,
        Some(SubCommand::Serve) | None => {
            let addr = args.addr.clone().unwrap_or_else(|| config.server.addr.clone());
            run_server(composer, &addr, config.server.max_body_bytes).await
        }
    }
}
