use std::sync::Arc;

use newsdesk::{ConfigProvider, GenerativeUpstream};
use newsdesk_server::adapters::{GeminiUpstream, ShuttleSecretConfig};
use newsdesk_server::{build_router, AppState};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📰 Newsdesk API initializing...");

    let config = ShuttleSecretConfig::new(secrets);

    // The key is still looked up per request; this only warns early
    if config.api_key().is_some() {
        tracing::info!("🔐 Gemini API key found in secrets");
    } else {
        tracing::warn!("⚠️  No GeminiAPIKey1 set - every proxy request will fail with 500");
    }

    let upstream = GeminiUpstream::new();
    tracing::info!("🔮 Gemini upstream initialized ({})", upstream.model_id());

    let state = AppState::new(Arc::new(config), Arc::new(upstream));
    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Newsdesk API ready - POST /api/gemini");

    Ok(router.into())
}
