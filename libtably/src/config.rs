//! Configuration management for Tably

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("TABLY_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("tably").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://menu.example.com\"\ntimeout_secs = 5"
        )
        .unwrap();

        let config = Config::load_from_path(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.api.base_url, "http://menu.example.com");
        assert_eq!(config.api.timeout_secs, 5);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://menu.example.com\"").unwrap();

        let config = Config::load_from_path(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.api.base_url, "http://menu.example.com");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let config = Config::load_from_path(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let path = PathBuf::from("/nonexistent/tably/config.toml");
        let result = Config::load_from_path(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let result = Config::load_from_path(&file.path().to_path_buf());
        assert!(result.is_err());
    }
}
