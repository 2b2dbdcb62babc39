//! Gemini Upstream Implementation
//!
//! Sends `generateContent` requests with reqwest. The API key travels as the
//! `key` query parameter, so it is stripped from every reported error.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use newsdesk::{GenerativeUpstream, UpstreamError, UpstreamPayload, UpstreamReply};

pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// reqwest implementation of GenerativeUpstream
#[derive(Clone)]
pub struct GeminiUpstream {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiUpstream {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the Gemini model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Points the adapter at another models endpoint (mock servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

impl Default for GeminiUpstream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeUpstream for GeminiUpstream {
    async fn generate_content(
        &self,
        api_key: &str,
        payload: &UpstreamPayload,
    ) -> Result<UpstreamReply, UpstreamError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(payload)
            .send()
            .await
            .map_err(|err| UpstreamError::Request(err.without_url().to_string()))?;

        let status = response.status().as_u16();

        let body: Value = response
            .json()
            .await
            .map_err(|err| UpstreamError::Decode(err.without_url().to_string()))?;

        tracing::debug!(status, model = %self.model, "Gemini replied");

        Ok(UpstreamReply::new(status, body))
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
