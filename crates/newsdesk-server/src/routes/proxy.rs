//! Proxy Route - Gemini generateContent relay

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use newsdesk::{InboundBody, ProxyError};

use crate::application::ProxyOutcome;
use crate::AppState;

pub const PROXY_PATH: &str = "/api/gemini";

/// Request body accepted by the proxy
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Prompt forwarded as the single user content part
    pub prompt: String,
    /// Appended to the base persona after "추가 지시: "
    pub extra_system_text: Option<String>,
}

/// Generated text from the first candidate
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub text: String,
}

/// Error body for every non-success response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors rendered as `{"error": ...}` with their status
pub enum ApiError {
    Proxy(ProxyError),
    /// Body could not be read, e.g. over the 2 MB extractor limit (413)
    Body(BytesRejection),
}

impl From<ProxyError> for ApiError {
    fn from(err: ProxyError) -> Self {
        Self::Proxy(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::Proxy(err) => (
                StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                err.to_string(),
            ),
            ApiError::Body(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl IntoResponse for ProxyOutcome {
    fn into_response(self) -> Response {
        match self {
            ProxyOutcome::Preflight => StatusCode::OK.into_response(),
            ProxyOutcome::Generated { text } => {
                (StatusCode::OK, Json(GenerateResponse { text })).into_response()
            }
        }
    }
}

/// Forward a prompt to Gemini under the news-summary persona
///
/// Accepts any method: `OPTIONS` answers the CORS preflight, everything but
/// `POST` gets 405. An unreadable body only fails a `POST`.
#[utoipa::path(
    post,
    path = "/api/gemini",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated text", body = GenerateResponse),
        (status = 400, description = "Invalid JSON body or missing prompt", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 413, description = "Body larger than 2 MB", body = ErrorResponse),
        (status = 500, description = "Missing API key, upstream error payload or transport failure", body = ErrorResponse)
    ),
    tag = "Proxy"
)]
pub async fn proxy(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<ProxyOutcome, ApiError> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) if method == Method::POST => {
            tracing::warn!(status = %rejection.status(), "Rejected proxy request body");
            return Err(rejection.into());
        }
        Err(_) => Bytes::new(),
    };

    let outcome = state
        .proxy
        .handle(&method, InboundBody::from_bytes(&body))
        .await?;

    Ok(outcome)
}

pub fn router() -> Router<AppState> {
    Router::new().route(PROXY_PATH, any(proxy))
}
