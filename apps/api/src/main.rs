mod auth;
mod config;
mod errors;
mod generation;
mod layout;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::StaticSessionVerifier;
use crate::config::Config;
use crate::generation::generator::LlmTreeGenerator;
use crate::layout::LayoutConfig;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPad API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.openrouter_api_key.clone(),
        config.openrouter_api_url.clone(),
        config.llm_timeout_secs.map(Duration::from_secs),
    )?;
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm_client::MODEL,
        config.openrouter_api_url
    );

    // Initialize session verification
    let sessions = StaticSessionVerifier::new(config.session_tokens.clone());
    if sessions.is_empty() {
        warn!("No session tokens configured; every generation request will be rejected");
    }

    let layout = LayoutConfig::default();
    info!(
        "Layout config: min_width={} sibling_spacing={} row_height={}",
        layout.min_width, layout.sibling_spacing, layout.row_height
    );

    // Build app state
    let state = AppState {
        generator: Arc::new(LlmTreeGenerator::new(llm)),
        sessions: Arc::new(sessions),
        layout,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
