//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config file name.
pub const CONFIG_FILE: &str = "cartkit.toml";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Behavior of the simulated checkout backend.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config content; `.json` paths are read as JSON, anything else as TOML.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Catalog source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// JSON file holding the products, keyed by id or as a list.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "products.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// How the simulated checkout backend answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SimulatedOutcome {
    /// Accept the order.
    #[default]
    Success,
    /// Answer `{"success": false}`.
    Declined,
    /// Fail the request with `error_message`.
    Error,
}

/// Simulated checkout backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutConfig {
    /// Outcome of every checkout.
    #[serde(default)]
    pub outcome: SimulatedOutcome,

    /// Message carried by a failed checkout.
    #[serde(default = "default_error_message")]
    pub error_message: String,

    /// Artificial latency before answering.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_error_message() -> String {
    "checkout service unavailable".to_string()
}

fn default_latency_ms() -> u64 {
    500
}

impl CheckoutConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            outcome: SimulatedOutcome::default(),
            error_message: default_error_message(),
            latency_ms: default_latency_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "cartkit_commerce=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Generate a default cartkit.toml config file.
pub fn generate_default_config() -> String {
    r#"# cartkit configuration

[catalog]
path = "products.json"

[checkout]
# success | declined | error
outcome = "success"
error_message = "checkout service unavailable"
latency_ms = 500

[log]
level = "warn"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = CliConfig::parse(CONFIG_FILE, &generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::parse(
            CONFIG_FILE,
            r#"
            [checkout]
            outcome = "error"
            error_message = "network down"
            "#,
        )
        .unwrap();

        assert_eq!(config.checkout.outcome, SimulatedOutcome::Error);
        assert_eq!(config.checkout.error_message, "network down");
        assert_eq!(config.checkout.latency_ms, 500);
        assert_eq!(config.catalog.path, "products.json");
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            "cartkit.json",
            r#"{"checkout": {"outcome": "declined", "latency_ms": 0}}"#,
        )
        .unwrap();
        assert_eq!(config.checkout.outcome, SimulatedOutcome::Declined);
        assert_eq!(config.checkout.latency(), Duration::ZERO);
    }

    #[test]
    fn test_unknown_outcome_rejected() {
        let result = CliConfig::parse(CONFIG_FILE, "[checkout]\noutcome = \"maybe\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = CliConfig::default();
        let rendered = config.to_toml().unwrap();
        assert_eq!(CliConfig::parse(CONFIG_FILE, &rendered).unwrap(), config);
    }
}
