use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use quizdoc::application::services::{DEFAULT_SYSTEM_PROMPT, QuizConfig, QuizService, RetryPolicy};
use quizdoc::infrastructure::llm::OpenAiClient;
use quizdoc::infrastructure::observability::{TracingConfig, init_tracing};
use quizdoc::infrastructure::text_processing::PdfAdapter;
use quizdoc::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let file_loader = Arc::new(PdfAdapter::with_timeout(Duration::from_secs(
        settings.extraction.timeout_secs,
    )));
    let llm_client = Arc::new(
        OpenAiClient::from_settings(&settings.llm, DEFAULT_SYSTEM_PROMPT.to_string())
            .context("failed to build LLM client")?,
    );

    if settings.llm.api_key.is_empty() {
        tracing::warn!(provider = %settings.llm.provider, "No LLM API key configured");
    }

    let quiz = &settings.quiz;
    let quiz_service = Arc::new(QuizService::new(
        file_loader,
        llm_client,
        QuizConfig {
            max_context_chars: quiz.max_context_chars,
            chunk_chars: quiz.chunk_chars,
            max_chunks: quiz.max_chunks,
            max_questions: quiz.max_questions,
            similarity_threshold: quiz.similarity_threshold,
            allowed_difficulties: quiz.allowed_difficulties.clone(),
        },
        RetryPolicy::new(
            settings.llm.max_retries,
            Duration::from_millis(settings.llm.retry_backoff_ms),
        ),
    ));

    let state = AppState {
        quiz_service,
        default_difficulty: quiz.default_difficulty.clone(),
        max_upload_bytes: settings.extraction.max_file_size_mb * 1024 * 1024,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!(
        %addr,
        model = %settings.llm.chat_model,
        provider = %settings.llm.provider,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
