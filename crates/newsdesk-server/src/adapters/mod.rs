//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod gemini;
pub mod secrets;

// Re-exports
pub use gemini::GeminiUpstream;
pub use secrets::{EnvConfig, ShuttleSecretConfig};
