mod config;
mod copywriter;
mod errors;
mod llm_client;
mod routes;
mod state;
mod usage;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::copywriter::session::SessionStore;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::usage::sink_from_config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Curator API v{}", env!("CARGO_PKG_VERSION"));

    if config.gemini_api_key.is_empty() {
        // Not a startup error: the key's absence surfaces as a request
        // failure on the first generation call.
        warn!("GEMINI_API_KEY is not set — generation requests will fail until it is provided");
    }

    // Initialize LLM client
    let llm = GeminiClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize usage sink (webhook when USAGE_LOG_URL is set)
    let usage = sink_from_config(config.usage_log_url.as_deref());
    info!(
        "Usage sink initialized ({})",
        if config.usage_log_url.is_some() {
            "webhook"
        } else {
            "disabled"
        }
    );

    // Build app state
    let state = AppState {
        llm,
        sessions: SessionStore::new(),
        usage,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
