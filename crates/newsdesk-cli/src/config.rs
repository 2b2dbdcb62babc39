//! Configuration management for Newsdesk CLI
//!
//! Stores the proxy URL and a default extra instruction in
//! ~/.config/newsdesk/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "newsdesk";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as `extraSystemText` when `ask` gets no `--extra`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_system_text: Option<String>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            extra_system_text: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim_end_matches('/').to_string();
    }

    pub fn set_extra_system_text(&mut self, text: Option<String>) {
        self.extra_system_text = text.filter(|t| !t.is_empty());
    }

    /// Explicit extra instruction wins over the stored default
    pub fn resolve_extra(&self, explicit: Option<String>) -> Option<String> {
        explicit.or_else(|| self.extra_system_text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.set_base_url("https://newsdesk.shuttle.app/");
        config.set_extra_system_text(Some("존댓말로 답하세요".to_string()));

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::parse(&text).unwrap();

        assert_eq!(parsed.base_url, "https://newsdesk.shuttle.app");
        assert_eq!(parsed.extra_system_text.as_deref(), Some("존댓말로 답하세요"));
    }

    #[test]
    fn test_resolve_extra_prefers_explicit() {
        let mut config = Config::default();
        assert_eq!(config.resolve_extra(None), None);

        config.set_extra_system_text(Some("default".to_string()));
        assert_eq!(config.resolve_extra(None).as_deref(), Some("default"));
        assert_eq!(
            config.resolve_extra(Some("explicit".to_string())).as_deref(),
            Some("explicit")
        );

        config.set_extra_system_text(Some(String::new()));
        assert_eq!(config.extra_system_text, None);
    }
}
