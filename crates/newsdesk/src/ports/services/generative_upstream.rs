//! Generative Upstream Port
//!
//! One `generateContent` call against the third-party API. The adapter
//! reports whatever status came back; mapping it to a caller response is
//! `UpstreamReply::into_text`'s job.

use async_trait::async_trait;

use crate::domain::entities::{UpstreamPayload, UpstreamReply};
use crate::domain::errors::UpstreamError;

#[async_trait]
pub trait GenerativeUpstream: Send + Sync {
    /// Send the payload once. No retry, no timeout.
    async fn generate_content(
        &self,
        api_key: &str,
        payload: &UpstreamPayload,
    ) -> Result<UpstreamReply, UpstreamError>;

    /// Model ID the adapter targets
    fn model_id(&self) -> &str;
}
