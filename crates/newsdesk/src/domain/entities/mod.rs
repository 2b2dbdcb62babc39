//! Domain Entities
//!
//! Transient request and reply shapes; nothing here is persisted.

mod inbound;
mod upstream;

pub use inbound::*;
pub use upstream::*;
