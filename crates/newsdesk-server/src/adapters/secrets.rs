//! Configuration Providers
//!
//! Shuttle secrets in deployment, process environment for local runs.
//! Both look the key up on every call.

use shuttle_runtime::SecretStore;

use newsdesk::{ConfigProvider, API_KEY_SECRET};

/// Reads the API key from Shuttle's secret store
pub struct ShuttleSecretConfig {
    secrets: SecretStore,
}

impl ShuttleSecretConfig {
    pub fn new(secrets: SecretStore) -> Self {
        Self { secrets }
    }
}

impl ConfigProvider for ShuttleSecretConfig {
    fn raw_api_key(&self) -> Option<String> {
        self.secrets.get(API_KEY_SECRET)
    }
}

/// Reads the API key from an environment variable
#[derive(Debug, Clone)]
pub struct EnvConfig {
    var: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::with_var(API_KEY_SECRET)
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for EnvConfig {
    fn raw_api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_is_read_per_call() {
        let config = EnvConfig::with_var("NEWSDESK_TEST_ENV_IS_READ_PER_CALL");
        assert_eq!(config.api_key(), None);

        std::env::set_var("NEWSDESK_TEST_ENV_IS_READ_PER_CALL", "from-env");
        assert_eq!(config.api_key().as_deref(), Some("from-env"));

        std::env::set_var("NEWSDESK_TEST_ENV_IS_READ_PER_CALL", "");
        assert_eq!(config.api_key(), None);

        std::env::remove_var("NEWSDESK_TEST_ENV_IS_READ_PER_CALL");
    }

    #[test]
    fn test_default_var_name() {
        assert_eq!(EnvConfig::default().var, "GeminiAPIKey1");
    }
}
