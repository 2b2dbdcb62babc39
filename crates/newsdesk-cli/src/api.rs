//! Newsdesk API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API Client for the Newsdesk proxy
pub struct NewsdeskClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest<'a> {
    pub prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_system_text: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct AskResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl NewsdeskClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Send a prompt through the proxy and return the generated text
    pub async fn ask(&self, prompt: &str, extra_system_text: Option<&str>) -> Result<String> {
        let url = format!("{}/api/gemini", self.base_url);

        let request = AskRequest {
            prompt,
            extra_system_text,
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Newsdesk API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            bail!("API error ({}): {}", status, message);
        }

        let answer: AskResponse = resp.json().await.context("Failed to parse response")?;

        Ok(answer.text)
    }
}
