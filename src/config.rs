//! Client configuration management.
//!
//! This module handles loading and saving the client configuration, which
//! covers the API base URL and the HTTP request timeout.
//!
//! Configuration is stored at `~/.config/chatterbox/config.json`. The
//! `CHATTERBOX_API_URL` environment variable overrides the configured URL.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
pub const APP_NAME: &str = "chatterbox";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the API base URL
const API_URL_ENV: &str = "CHATTERBOX_API_URL";

/// Default API base URL, matching the backend's development port
const DEFAULT_API_URL: &str = "http://localhost:5000";

/// HTTP request timeout in seconds.
/// 30s allows for slow backend responses while failing fast enough for good UX.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at an explicit base URL, with defaults for
    /// everything else.
    pub fn with_api_url(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            ..Self::default()
        }
    }

    /// Load the config file at the default location, falling back to
    /// defaults when it does not exist. The `CHATTERBOX_API_URL`
    /// environment variable, when set, overrides the file's API URL.
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        Ok(config.with_env_override(std::env::var(API_URL_ENV).ok()))
    }

    /// Load a config file at an explicit path, falling back to defaults
    /// when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write the config as JSON at an explicit path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Apply the API URL override value, ignoring unset and empty values.
    fn with_env_override(mut self, api_url: Option<String>) -> Self {
        if let Some(api_url) = api_url {
            if !api_url.is_empty() {
                self.api_url = api_url;
            }
        }
        self
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_with_api_url_keeps_default_timeout() {
        let config = ClientConfig::with_api_url("https://chat.example.com");
        assert_eq!(config.api_url, "https://chat.example.com");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_parse_config_without_timeout_uses_default() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_url": "https://chat.example.com"}"#)
                .expect("Failed to parse config");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = ClientConfig::load_from(&dir.path().join(CONFIG_FILE))
            .expect("Failed to load config");
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_save_to_then_load_from_round_trips() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        let config = ClientConfig {
            api_url: "https://chat.example.com".to_string(),
            request_timeout_secs: 10,
        };
        config.save_to(&path).expect("Failed to save config");

        let loaded = ClientConfig::load_from(&path).expect("Failed to load config");
        assert_eq!(loaded.api_url, "https://chat.example.com");
        assert_eq!(loaded.request_timeout_secs, 10);
    }

    #[test]
    fn test_load_from_rejects_corrupt_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "not json").expect("Failed to write config");
        assert!(ClientConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_env_override_replaces_api_url() {
        let config = ClientConfig::default()
            .with_env_override(Some("https://env.example.com".to_string()));
        assert_eq!(config.api_url, "https://env.example.com");
    }

    #[test]
    fn test_env_override_ignores_unset_and_empty() {
        let config = ClientConfig::default().with_env_override(None);
        assert_eq!(config.api_url, "http://localhost:5000");

        let config = ClientConfig::default().with_env_override(Some(String::new()));
        assert_eq!(config.api_url, "http://localhost:5000");
    }
}
