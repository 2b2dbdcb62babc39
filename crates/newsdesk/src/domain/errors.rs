//! Domain Errors
//!
//! Every failure the proxy can report, with the HTTP status and the
//! caller-facing message attached.

use thiserror::Error;

/// Name of the secret holding the Gemini API key
pub const API_KEY_SECRET: &str = "GeminiAPIKey1";

/// Inbound body rejected before any upstream work
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Invalid JSON body")]
    InvalidJson,

    #[error("prompt is required")]
    MissingPrompt,
}

/// Failure reported by a `GenerativeUpstream` adapter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The request never produced a response (connect, TLS, I/O)
    #[error("{0}")]
    Request(String),

    /// A response arrived but its body was not JSON
    #[error("{0}")]
    Decode(String),
}

/// Proxy errors, one per terminal non-success response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(
        "Gemini API 키가 설정되지 않았습니다. 배포 환경의 시크릿(Secrets.toml) 또는 환경 변수에 GeminiAPIKey1을 설정하세요."
    )]
    MissingApiKey,

    #[error(transparent)]
    InvalidRequest(#[from] RequestError),

    #[error("Gemini API 오류 (상태: {status}): {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("Gemini API 오류: {0}")]
    UpstreamPayload(String),

    #[error("서버 오류: {0}")]
    Transport(String),
}

impl ProxyError {
    /// HTTP status the caller receives for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::InvalidRequest(_) => 400,
            Self::UpstreamStatus { status, .. } => *status,
            Self::MissingApiKey | Self::UpstreamPayload(_) | Self::Transport(_) => 500,
        }
    }
}

impl From<UpstreamError> for ProxyError {
    fn from(err: UpstreamError) -> Self {
        Self::Transport(err.to_string())
    }
}
