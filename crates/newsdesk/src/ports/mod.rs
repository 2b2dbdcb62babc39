//! Ports (Interfaces)
//!
//! Abstract interfaces for the configuration source and the upstream
//! generative API. Implementations live in the server crate.

pub mod services;

// Re-exports
pub use services::*;
