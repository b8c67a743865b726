use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interview_agent::analysis::analyzer::TranscriptAnalyzer;
use interview_agent::analysis::dispatcher::{ResultDispatcher, DELIVERY_TIMEOUT};
use interview_agent::config::Config;
use interview_agent::interview::instructions::PromptTemplate;
use interview_agent::interview::room_data::{RoomDataClient, ROOM_FETCH_TIMEOUT};
use interview_agent::llm_client::{GeminiClient, TextModel};
use interview_agent::routes::build_router;
use interview_agent::session::pipeline::SessionFinalizer;
use interview_agent::session::store::TranscriptStore;
use interview_agent::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing API key before any network call)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("interview_agent={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting interview agent v{}", env!("CARGO_PKG_VERSION"));

    // A broken template would fail every session; refuse to start instead.
    PromptTemplate::load(&config.prompt_template_path)?;
    info!(
        "Prompt template validated: {}",
        config.prompt_template_path.display()
    );

    let model: Arc<dyn TextModel> = Arc::new(GeminiClient::new(
        config.google_api_key.clone(),
        config.gemini_api_base.clone(),
        config.gemini_model.clone(),
    ));
    info!("LLM client initialized (model: {})", model.name());

    let analyzer = Arc::new(TranscriptAnalyzer::new(model, config.schema_mode));
    info!("Analysis schema mode: {:?}", analyzer.mode());

    let dispatcher = ResultDispatcher::new(
        &config.backend_url,
        DELIVERY_TIMEOUT,
        config.backend_accept_invalid_certs,
    )
    .context("Failed to build result dispatcher HTTP client")?;

    let room_data = RoomDataClient::new(
        &config.backend_url,
        ROOM_FETCH_TIMEOUT,
        config.backend_accept_invalid_certs,
    )
    .context("Failed to build room data HTTP client")?;
    info!("Backend: {}", config.backend_url);

    let store = TranscriptStore::new(config.transcript_dir.clone());
    info!("Transcripts will be written to {}", store.dir().display());

    let state = AppState {
        room_data,
        prompt_template_path: Arc::new(config.prompt_template_path.clone()),
        finalizer: SessionFinalizer::new(store, analyzer, Arc::new(dispatcher)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
