mod analysis;
mod config;
mod errors;
mod i18n;
mod llm_client;
mod routes;
mod session;
mod state;
mod view;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::client::GeminiClassifier;
use crate::config::Config;
use crate::i18n::Language;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::store::{spawn_idle_sweeper, SessionStore};
use crate::state::AppState;

const SESSION_SWEEP_PERIOD: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing Gemini key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ScamCheck API v{}", env!("CARGO_PKG_VERSION"));

    // Every language must define every label
    for language in Language::ALL {
        let missing = language.bundle().missing_labels();
        if !missing.is_empty() {
            anyhow::bail!("Localization bundle '{language}' is missing labels: {missing:?}");
        }
    }

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_base_url.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        classifier: Arc::new(GeminiClassifier(llm)),
        sessions: SessionStore::default(),
    };

    // Evict abandoned sessions
    let max_idle = chrono::Duration::seconds(i64::from(config.session_idle_secs));
    spawn_idle_sweeper(state.sessions.clone(), max_idle, SESSION_SWEEP_PERIOD);
    info!("Session idle timeout: {}s", config.session_idle_secs);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
