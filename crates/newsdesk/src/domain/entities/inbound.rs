//! Inbound Request
//!
//! What the caller sent, before and after validation.

use serde_json::Value;

use crate::domain::errors::RequestError;

/// Raw request body as handed to the proxy
#[derive(Debug, Clone, PartialEq)]
pub enum InboundBody {
    /// Body already decoded as a JSON value
    Parsed(Value),
    /// Body still to be parsed as JSON
    Text(String),
    /// Bytes that are not UTF-8, rejected as invalid JSON
    Invalid,
}

impl InboundBody {
    /// Classify raw body bytes.
    ///
    /// A JSON document whose top-level value is a string is unwrapped into
    /// `Text`, so double-encoded bodies get parsed a second time. Anything
    /// that is not JSON stays `Text` and fails later in `InboundRequest::parse`.
    /// Non-UTF-8 bytes are never repaired.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::String(text)) => Self::Text(text),
            Ok(value) => Self::Parsed(value),
            Err(_) => match std::str::from_utf8(bytes) {
                Ok(text) => Self::Text(text.to_string()),
                Err(_) => Self::Invalid,
            },
        }
    }

    /// Resolve to a JSON value
    pub fn into_json(self) -> Result<Value, RequestError> {
        match self {
            Self::Parsed(value) => Ok(value),
            Self::Text(text) => {
                serde_json::from_str(&text).map_err(|_| RequestError::InvalidJson)
            }
            Self::Invalid => Err(RequestError::InvalidJson),
        }
    }
}

impl From<Value> for InboundBody {
    fn from(value: Value) -> Self {
        Self::Parsed(value)
    }
}

impl From<String> for InboundBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for InboundBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Validated request, built only through `parse`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundRequest {
    pub prompt: String,
    pub extra_system_text: Option<String>,
}

impl InboundRequest {
    /// Parse and validate a body.
    ///
    /// `prompt` must be a non-empty string. `extraSystemText` is kept only
    /// when it is a non-empty string; any other value is ignored.
    pub fn parse(body: InboundBody) -> Result<Self, RequestError> {
        let value = body.into_json()?;

        let prompt = value
            .get("prompt")
            .and_then(Value::as_str)
            .filter(|p| !p.is_empty())
            .ok_or(RequestError::MissingPrompt)?;

        let extra_system_text = value
            .get("extraSystemText")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(Self {
            prompt: prompt.to_string(),
            extra_system_text,
        })
    }
}
