//! Configuration Provider Port
//!
//! Source of the upstream API key. Read on every request so a missing
//! secret fails that request only, never process startup.

use std::sync::Arc;

/// Read-only access to process-wide configuration
pub trait ConfigProvider: Send + Sync {
    /// Raw value of the API key secret, if set
    fn raw_api_key(&self) -> Option<String>;

    /// API key, treating an empty value as unset
    fn api_key(&self) -> Option<String> {
        self.raw_api_key().filter(|key| !key.is_empty())
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for Arc<T> {
    fn raw_api_key(&self) -> Option<String> {
        (**self).raw_api_key()
    }
}

/// Fixed key, for local tools and tests
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    api_key: Option<String>,
}

impl StaticConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    pub fn unset() -> Self {
        Self::default()
    }
}

impl ConfigProvider for StaticConfig {
    fn raw_api_key(&self) -> Option<String> {
        self.api_key.clone()
    }
}
