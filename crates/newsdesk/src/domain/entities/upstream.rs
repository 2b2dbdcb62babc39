//! Upstream Payload and Reply
//!
//! The `generateContent` request body, and the raw reply mapped back to
//! either generated text or a `ProxyError`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::inbound::InboundRequest;
use crate::domain::errors::ProxyError;
use crate::domain::value_objects::SystemInstruction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Body sent to the upstream generative endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamPayload {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
}

impl UpstreamPayload {
    pub fn new(prompt: impl Into<String>, instruction: SystemInstruction) -> Self {
        Self {
            contents: vec![Content::text(prompt)],
            system_instruction: Content::text(instruction.into_inner()),
        }
    }

    /// Prompt text of the single user content part
    pub fn prompt(&self) -> &str {
        first_text(&self.contents)
    }

    /// Composed system instruction text
    pub fn system_text(&self) -> &str {
        first_text(std::slice::from_ref(&self.system_instruction))
    }
}

impl From<InboundRequest> for UpstreamPayload {
    fn from(req: InboundRequest) -> Self {
        let instruction = SystemInstruction::compose(req.extra_system_text.as_deref());
        Self::new(req.prompt, instruction)
    }
}

fn first_text(contents: &[Content]) -> &str {
    contents
        .first()
        .and_then(|c| c.parts.first())
        .map(|p| p.text.as_str())
        .unwrap_or_default()
}

/// Status and decoded JSON body returned by the upstream
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

impl UpstreamReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Map the reply to the generated text or the error the caller sees
    pub fn into_text(self) -> Result<String, ProxyError> {
        let error = self.body.get("error");

        if !self.is_success() {
            let message = error
                .and_then(error_message)
                .or_else(|| error.map(Value::to_string))
                .unwrap_or_else(|| self.status.to_string());
            return Err(ProxyError::UpstreamStatus {
                status: self.status,
                message,
            });
        }

        if let Some(error) = error.filter(|e| is_truthy(e)) {
            let message = error_message(error).unwrap_or_else(|| error.to_string());
            return Err(ProxyError::UpstreamPayload(message));
        }

        Ok(self
            .body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}

/// Truthy `error.message`, verbatim when a string and as JSON otherwise
fn error_message(error: &Value) -> Option<String> {
    error
        .get("message")
        .filter(|m| is_truthy(m))
        .map(|m| m.as_str().map_or_else(|| m.to_string(), str::to_string))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
