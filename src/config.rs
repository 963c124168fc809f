use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::agent::Pacing;
use crate::dirs;
use crate::error::{ChatError, Result};

/// User-configurable settings for the chat server and CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Host address for the HTTP server (default: 127.0.0.1)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for the HTTP server (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Pace placeholder agents like a real model would (default: true)
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,

    /// Seconds between SSE keep-alive comments (default: 15)
    #[serde(default = "default_keep_alive_secs")]
    pub keep_alive_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_simulate_latency() -> bool {
    true
}

fn default_keep_alive_secs() -> u64 {
    15
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            simulate_latency: default_simulate_latency(),
            keep_alive_secs: default_keep_alive_secs(),
        }
    }
}

impl ChatConfig {
    /// Load configuration from the default config file path.
    /// Returns default config if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&dirs::config_path())
    }

    /// Load configuration from `path`, falling back to defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            ChatError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: ChatConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save the current configuration to the default config file path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&dirs::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the server bind address string (e.g., "127.0.0.1:8000").
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Agent pacing selected by `simulate_latency`.
    pub fn pacing(&self) -> Pacing {
        if self.simulate_latency {
            Pacing::Natural
        } else {
            Pacing::Instant
        }
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert!(config.simulate_latency);
        assert_eq!(config.pacing(), Pacing::Natural);
        assert_eq!(config.keep_alive(), Duration::from_secs(15));
    }

    #[test]
    fn test_bind_address() {
        let config = ChatConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml_str = r#"
            host = "0.0.0.0"
            simulate_latency = false
        "#;
        let config: ChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.pacing(), Pacing::Instant);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ChatConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ChatConfig::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();
        assert!(matches!(
            ChatConfig::load_from(&path),
            Err(ChatError::TomlDe(_))
        ));
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = ChatConfig {
            host: "0.0.0.0".to_string(),
            port: 9999,
            simulate_latency: false,
            keep_alive_secs: 5,
        };
        config.save_to(&path).unwrap();

        let loaded = ChatConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
