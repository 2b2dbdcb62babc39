//! Service Ports

mod config_provider;
mod generative_upstream;

pub use config_provider::*;
pub use generative_upstream::*;
