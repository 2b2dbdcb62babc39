//! Newsdesk Domain Library
//!
//! Core types and interfaces for the Newsdesk Gemini proxy: a single
//! handler that forwards a prompt to Gemini under a fixed Korean
//! news-summary persona and normalizes the reply.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): request validation and reply mapping
//!   - `entities/`: `InboundBody`, `InboundRequest`, `UpstreamPayload`, `UpstreamReply`
//!   - `value_objects/`: `SystemInstruction`
//!   - `errors/`: `ProxyError`, `RequestError`, `UpstreamError`
//!
//! - **Ports** (`ports/`): abstract interfaces
//!   - `ConfigProvider`: where the API key comes from
//!   - `GenerativeUpstream`: the outbound `generateContent` call
//!
//! # Usage
//!
//! ```rust
//! use newsdesk::{InboundRequest, UpstreamPayload};
//!
//! let req = InboundRequest::parse(r#"{"prompt":"요약해 줘"}"#.into()).unwrap();
//! let payload = UpstreamPayload::from(req);
//! assert_eq!(payload.prompt(), "요약해 줘");
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Content, InboundBody, InboundRequest, Part, ProxyError, RequestError, SystemInstruction,
    UpstreamError, UpstreamPayload, UpstreamReply, API_KEY_SECRET, BASE_SYSTEM_TEXT,
    EXTRA_SEPARATOR,
};
pub use ports::{ConfigProvider, GenerativeUpstream, StaticConfig};
