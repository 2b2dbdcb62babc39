//! Newsdesk API Server
//!
//! HTTP surface and infrastructure adapters for the Gemini proxy. The
//! Shuttle entry point (`main.rs`) and the local binary (`bin/local.rs`)
//! both assemble their router with [`build_router`].

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use newsdesk::{ConfigProvider, GenerativeUpstream};

pub mod adapters;
pub mod application;
pub mod routes;

use application::ProxyService;

/// Proxy service over injected configuration and upstream
pub type AppProxyService = ProxyService<dyn ConfigProvider, dyn GenerativeUpstream>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<AppProxyService>,
}

impl AppState {
    pub fn new(config: Arc<dyn ConfigProvider>, upstream: Arc<dyn GenerativeUpstream>) -> Self {
        Self {
            proxy: Arc::new(ProxyService::new(config, upstream)),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Newsdesk API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with CORS headers on every response
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::proxy::router())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
