//! Configuration file handling for fems-poll

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the polling tool
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// FEMS host address
    pub host: Option<String>,
    /// FEMS REST port
    pub port: Option<u16>,
    /// Basic-auth username
    pub user: Option<String>,
    /// Basic-auth password
    pub password: Option<String>,
    /// Seconds between polling sweeps
    pub interval: Option<u64>,
    /// Comma-separated metric names
    pub metrics: Option<String>,
}

impl Config {
    /// Load configuration from the default config file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("fems-poll");

        Ok(config_dir.join("config.toml"))
    }

    /// Merge CLI/env arguments over config file values, falling back to
    /// the stock FEMS defaults.
    pub fn merge_with_args(
        &self,
        host: Option<&str>,
        port: Option<u16>,
        user: Option<&str>,
        password: Option<&str>,
        interval: Option<u64>,
        metrics: Option<&str>,
    ) -> MergedConfig {
        MergedConfig {
            host: host
                .map(String::from)
                .or_else(|| self.host.clone())
                .unwrap_or_else(|| "192.168.180.2".to_string()),
            port: port.or(self.port).unwrap_or(80),
            user: user
                .map(String::from)
                .or_else(|| self.user.clone())
                .unwrap_or_else(|| "x".to_string()),
            password: password
                .map(String::from)
                .or_else(|| self.password.clone())
                .unwrap_or_else(|| "user".to_string()),
            interval: interval.or(self.interval).unwrap_or(30),
            metrics: metrics
                .map(String::from)
                .or_else(|| self.metrics.clone())
                .unwrap_or_else(|| "grid_power,production_power,battery_power".to_string()),
        }
    }
}

/// Fully resolved configuration after merging CLI args
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub interval: u64,
    pub metrics: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let merged = Config::default().merge_with_args(None, None, None, None, None, None);
        assert_eq!(merged.host, "192.168.180.2");
        assert_eq!(merged.port, 80);
        assert_eq!(merged.user, "x");
        assert_eq!(merged.password, "user");
        assert_eq!(merged.interval, 30);
        assert_eq!(merged.metrics, "grid_power,production_power,battery_power");
    }

    #[test]
    fn cli_values_win_over_file_values() {
        let config = Config {
            host: Some("10.0.0.5".to_string()),
            port: Some(8084),
            interval: Some(60),
            ..Config::default()
        };

        let merged =
            config.merge_with_args(Some("fems.local"), None, None, None, Some(10), None);
        assert_eq!(merged.host, "fems.local");
        assert_eq!(merged.port, 8084);
        assert_eq!(merged.interval, 10);
    }

    #[test]
    fn parses_toml_fields() {
        let config: Config = toml::from_str(
            r#"
            host = "fems.local"
            port = 8084
            metrics = "battery_power"
            "#,
        )
        .unwrap();
        assert_eq!(config.host.as_deref(), Some("fems.local"));
        assert_eq!(config.port, Some(8084));
        assert_eq!(config.metrics.as_deref(), Some("battery_power"));
        assert_eq!(config.user, None);
    }
}
