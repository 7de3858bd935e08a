use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON lines instead of the pretty console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings handed to the browser-side form controller
#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// Acknowledge in the browser without calling `/api/contact`
    #[serde(default)]
    pub simulate: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            simulate: false,
        }
    }
}

fn default_submit_delay_ms() -> u64 {
    2000
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CAREWEAVE__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CAREWEAVE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.server.host.is_empty() {
            return Err("Server host must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str, port: u16) -> Config {
        Config {
            server: ServerConfig {
                host: host.to_string(),
                port,
            },
            observability: ObservabilityConfig::default(),
            contact: ContactConfig::default(),
        }
    }

    #[test]
    fn test_validation_zero_port() {
        assert!(config("127.0.0.1", 0).validate().is_err());
    }

    #[test]
    fn test_validation_empty_host() {
        assert!(config("", 3000).validate().is_err());
    }

    #[test]
    fn test_validation_defaults_pass() {
        let config = config("127.0.0.1", 3000);

        assert!(config.validate().is_ok());
        assert_eq!(config.contact.submit_delay_ms, 2000);
        assert!(!config.contact.simulate);
        assert_eq!(config.observability.log_level, "info");
    }
}
