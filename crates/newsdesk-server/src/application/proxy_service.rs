//! Proxy Application Service (Use Case)
//!
//! One inbound request in, at most one upstream call, one terminal outcome.

use axum::http::Method;
use std::sync::Arc;

use newsdesk::{
    ConfigProvider, GenerativeUpstream, InboundBody, InboundRequest, ProxyError, UpstreamPayload,
};

/// Successful terminal outcome of a proxy invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyOutcome {
    /// CORS preflight, answered with an empty body
    Preflight,
    /// First candidate text from the upstream
    Generated { text: String },
}

/// Application service for the Gemini proxy
pub struct ProxyService<C, U>
where
    C: ConfigProvider + ?Sized,
    U: GenerativeUpstream + ?Sized,
{
    config: Arc<C>,
    upstream: Arc<U>,
}

impl<C, U> ProxyService<C, U>
where
    C: ConfigProvider + ?Sized,
    U: GenerativeUpstream + ?Sized,
{
    pub fn new(config: Arc<C>, upstream: Arc<U>) -> Self {
        Self { config, upstream }
    }

    /// Handle one request.
    ///
    /// Checks run in a fixed order: method, API key, body, prompt. The
    /// upstream is called only when all of them pass.
    pub async fn handle(
        &self,
        method: &Method,
        body: InboundBody,
    ) -> Result<ProxyOutcome, ProxyError> {
        if method == Method::OPTIONS {
            return Ok(ProxyOutcome::Preflight);
        }

        if method != Method::POST {
            return Err(ProxyError::MethodNotAllowed);
        }

        let api_key = self.config.api_key().ok_or_else(|| {
            tracing::error!("Gemini API key is not configured");
            ProxyError::MissingApiKey
        })?;

        let request = InboundRequest::parse(body)?;
        let payload = UpstreamPayload::from(request);

        tracing::info!(
            model = self.upstream.model_id(),
            prompt_chars = payload.prompt().chars().count(),
            "Forwarding prompt to Gemini"
        );

        let reply = self
            .upstream
            .generate_content(&api_key, &payload)
            .await
            .map_err(|e| {
                tracing::error!("Gemini API proxy error: {}", e);
                ProxyError::from(e)
            })?;

        let status = reply.status;
        let text = reply.into_text().map_err(|e| {
            tracing::warn!(status, "Gemini API returned an error: {}", e);
            e
        })?;

        Ok(ProxyOutcome::Generated { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use newsdesk::{StaticConfig, UpstreamError, UpstreamReply, BASE_SYSTEM_TEXT};
    use serde_json::json;
    use std::sync::Mutex;

    struct FakeUpstream {
        reply: Result<UpstreamReply, UpstreamError>,
        calls: Mutex<Vec<(String, UpstreamPayload)>>,
    }

    impl FakeUpstream {
        fn replying(status: u16, body: serde_json::Value) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(UpstreamReply::new(status, body)),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(err: UpstreamError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(err),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, UpstreamPayload)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerativeUpstream for FakeUpstream {
        async fn generate_content(
            &self,
            api_key: &str,
            payload: &UpstreamPayload,
        ) -> Result<UpstreamReply, UpstreamError> {
            self.calls
                .lock()
                .unwrap()
                .push((api_key.to_string(), payload.clone()));
            self.reply.clone()
        }

        fn model_id(&self) -> &str {
            "fake"
        }
    }

    fn hello_reply() -> Arc<FakeUpstream> {
        FakeUpstream::replying(
            200,
            json!({"candidates": [{"content": {"parts": [{"text": "hello"}]}}]}),
        )
    }

    fn service(
        config: StaticConfig,
        upstream: &Arc<FakeUpstream>,
    ) -> ProxyService<StaticConfig, FakeUpstream> {
        ProxyService::new(Arc::new(config), upstream.clone())
    }

    #[tokio::test]
    async fn test_valid_prompt_makes_exactly_one_call() {
        let upstream = hello_reply();
        let svc = service(StaticConfig::new("key-1"), &upstream);

        let outcome = svc
            .handle(&Method::POST, json!({"prompt": "오늘의 경제 뉴스"}).into())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ProxyOutcome::Generated {
                text: "hello".to_string()
            }
        );

        let calls = upstream.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "key-1");
        assert_eq!(calls[0].1.prompt(), "오늘의 경제 뉴스");
        assert_eq!(calls[0].1.system_text(), BASE_SYSTEM_TEXT);
    }

    #[tokio::test]
    async fn test_extra_system_text_is_forwarded() {
        let upstream = hello_reply();
        let svc = service(StaticConfig::new("k"), &upstream);

        svc.handle(
            &Method::POST,
            r#"{"prompt":"p","extraSystemText":"불릿으로 답하세요"}"#.into(),
        )
        .await
        .unwrap();

        let calls = upstream.calls();
        assert!(calls[0]
            .1
            .system_text()
            .ends_with("\n\n추가 지시: 불릿으로 답하세요"));
    }

    #[tokio::test]
    async fn test_options_is_preflight_regardless_of_body() {
        let upstream = hello_reply();
        let svc = service(StaticConfig::unset(), &upstream);

        let outcome = svc.handle(&Method::OPTIONS, "not json".into()).await.unwrap();

        assert_eq!(outcome, ProxyOutcome::Preflight);
        assert!(upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_other_methods_are_rejected() {
        let upstream = hello_reply();
        let svc = service(StaticConfig::new("k"), &upstream);

        for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
            let err = svc
                .handle(&method, json!({"prompt": "p"}).into())
                .await
                .unwrap_err();
            assert_eq!(err, ProxyError::MethodNotAllowed);
        }
        assert!(upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_skips_upstream() {
        let upstream = hello_reply();
        let svc = service(StaticConfig::unset(), &upstream);

        let err = svc
            .handle(&Method::POST, json!({"prompt": "p"}).into())
            .await
            .unwrap_err();

        assert_eq!(err, ProxyError::MissingApiKey);
        assert_eq!(err.status_code(), 500);
        assert!(upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_wins_over_bad_body() {
        let upstream = hello_reply();
        let svc = service(StaticConfig::unset(), &upstream);

        let err = svc
            .handle(&Method::POST, "not json".into())
            .await
            .unwrap_err();

        assert_eq!(err, ProxyError::MissingApiKey);
    }

    #[tokio::test]
    async fn test_invalid_body_and_missing_prompt() {
        let upstream = hello_reply();
        let svc = service(StaticConfig::new("k"), &upstream);

        let err = svc
            .handle(&Method::POST, "not json".into())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON body");
        assert_eq!(err.status_code(), 400);

        let err = svc.handle(&Method::POST, json!({}).into()).await.unwrap_err();
        assert_eq!(err.to_string(), "prompt is required");
        assert_eq!(err.status_code(), 400);

        assert!(upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_no_candidates_yields_empty_text() {
        let upstream = FakeUpstream::replying(200, json!({"promptFeedback": {}}));
        let svc = service(StaticConfig::new("k"), &upstream);

        let outcome = svc
            .handle(&Method::POST, json!({"prompt": "p"}).into())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ProxyOutcome::Generated {
                text: String::new()
            }
        );
    }

    #[tokio::test]
    async fn test_upstream_status_is_propagated() {
        let upstream = FakeUpstream::replying(400, json!({"error": {"message": "bad key"}}));
        let svc = service(StaticConfig::new("k"), &upstream);

        let err = svc
            .handle(&Method::POST, json!({"prompt": "p"}).into())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("bad key"));
        assert_eq!(upstream.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_server_error() {
        let upstream = FakeUpstream::failing(UpstreamError::Request("connection reset".into()));
        let svc = service(StaticConfig::new("k"), &upstream);

        let err = svc
            .handle(&Method::POST, json!({"prompt": "p"}).into())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "서버 오류: connection reset");
    }
}
