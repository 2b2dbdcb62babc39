//! Local development server
//!
//! Same router as the Shuttle deployment, with the API key taken from the
//! environment (or a `.env` file).

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use newsdesk::GenerativeUpstream;
use newsdesk_server::adapters::{EnvConfig, GeminiUpstream};
use newsdesk_server::{build_router, AppState};

const DEFAULT_ADDR: &str = "127.0.0.1:8000";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,newsdesk_server=debug,tower_http=debug")),
        )
        .init();

    let addr = std::env::var("NEWSDESK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let upstream = GeminiUpstream::new();
    tracing::info!("🔮 Gemini upstream initialized ({})", upstream.model_id());

    let state = AppState::new(Arc::new(EnvConfig::new()), Arc::new(upstream));
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("✅ Newsdesk listening on http://{}/api/gemini", addr);

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
