//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! configuration and the upstream adapter.

mod proxy_service;

pub use proxy_service::{ProxyOutcome, ProxyService};
