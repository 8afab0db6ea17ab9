use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "YT_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_search_url")]
    pub search_url: String,

    #[serde(default = "default_channels_url")]
    pub channels_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_search_url() -> String {
    "https://www.googleapis.com/youtube/v3/search".to_string()
}

fn default_channels_url() -> String {
    "https://www.googleapis.com/youtube/v3/channels".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key is empty; set {API_KEY_ENV} or api_key in {DEFAULT_CONFIG_PATH}")]
    MissingApiKey,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            search_url: default_search_url(),
            channels_url: default_channels_url(),
            log_level: default_log_level(),
        }
    }
}

impl ExportConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ExportConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `config.toml` when present, defaults otherwise.
    /// The `YT_API_KEY` environment variable takes precedence over the file.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)?
        } else {
            Self::default()
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.api_key = key.trim().to_string();
            }
        }

        Ok(config)
    }

    /// The credential must be present before any request is issued.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.search_url, "https://www.googleapis.com/youtube/v3/search");
        assert_eq!(config.channels_url, "https://www.googleapis.com/youtube/v3/channels");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ExportConfig = toml::from_str(r#"api_key = "abc123""#).unwrap();
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.search_url, "https://www.googleapis.com/youtube/v3/search");
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let config = ExportConfig::default();
        assert!(matches!(config.validate(), Err(ConfigError::MissingApiKey)));

        let config = ExportConfig {
            api_key: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_key() {
        let config = ExportConfig {
            api_key: "abc123".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_key = \"k\"\nlog_level = \"debug\"\n").unwrap();

        let config = ExportConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.log_level, "debug");
    }
}
