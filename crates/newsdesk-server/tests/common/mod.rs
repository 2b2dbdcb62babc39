//! Shared fakes for router tests

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

use newsdesk::{
    GenerativeUpstream, StaticConfig, UpstreamError, UpstreamPayload, UpstreamReply,
};
use newsdesk_server::{build_router, AppState};

/// Upstream that records every call and answers with a canned reply
pub struct RecordingUpstream {
    reply: Result<UpstreamReply, UpstreamError>,
    calls: Mutex<Vec<UpstreamPayload>>,
}

impl RecordingUpstream {
    pub fn replying(status: u16, body: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(UpstreamReply::new(status, body)),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(err: UpstreamError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(err),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<UpstreamPayload> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeUpstream for RecordingUpstream {
    async fn generate_content(
        &self,
        _api_key: &str,
        payload: &UpstreamPayload,
    ) -> Result<UpstreamReply, UpstreamError> {
        self.calls.lock().unwrap().push(payload.clone());
        self.reply.clone()
    }

    fn model_id(&self) -> &str {
        "recording"
    }
}

pub fn app(config: StaticConfig, upstream: Arc<RecordingUpstream>) -> Router {
    build_router(AppState::new(Arc::new(config), upstream))
}

pub async fn send(app: Router, method: &str, body: impl Into<Body>) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri("/api/gemini")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
