//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Telemetry dataset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,

    /// Rows per window served to the dashboard
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Cadence hint the dashboard uses for its tick timer (ms)
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_dataset_path() -> String {
    "data/iot_telemetry.csv".to_string()
}

fn default_chunk_size() -> usize {
    25
}

fn default_poll_interval() -> u64 {
    3_000
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            chunk_size: default_chunk_size(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("iotwatch").join("config.toml")),
            Some(PathBuf::from("/etc/iotwatch/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("IOTWATCH_DATASET") {
            self.dataset.path = path;
        }
        if let Ok(size) = std::env::var("IOTWATCH_CHUNK_SIZE") {
            if let Ok(s) = size.parse() {
                self.dataset.chunk_size = s;
            }
        }
        if let Ok(interval) = std::env::var("IOTWATCH_POLL_INTERVAL_MS") {
            if let Ok(ms) = interval.parse() {
                self.dataset.poll_interval_ms = ms;
            }
        }

        if let Ok(host) = std::env::var("IOTWATCH_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("IOTWATCH_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Ok(level) = std::env::var("IOTWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("IOTWATCH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Reject configurations the server could never serve from
    fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "dataset.chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.dataset.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "dataset.poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# IoTWatch Configuration
#
# Environment variables override these settings:
# - IOTWATCH_DATASET
# - IOTWATCH_CHUNK_SIZE
# - IOTWATCH_POLL_INTERVAL_MS
# - IOTWATCH_API_HOST
# - IOTWATCH_API_PORT
# - IOTWATCH_LOG_LEVEL
# - IOTWATCH_LOG_FORMAT

[dataset]
# Telemetry CSV file, loaded once at startup
path = "data/iot_telemetry.csv"

# Rows per window served to the dashboard
chunk_size = 25

# Cadence hint for the dashboard's tick timer (ms)
poll_interval_ms = 3000

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins
cors_origins = ["http://localhost:8080", "http://127.0.0.1:8080"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dataset.chunk_size, 25);
        assert_eq!(config.dataset.poll_interval_ms, 3_000);
        assert_eq!(config.api.port, 8082);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
[dataset]
path = "/var/lib/iotwatch/telemetry.csv"
chunk_size = 15

[api]
port = 9000
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dataset.path, "/var/lib/iotwatch/telemetry.csv");
        assert_eq!(config.dataset.chunk_size, 15);
        assert_eq!(config.dataset.poll_interval_ms, 3_000);
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let config: Config = toml::from_str("[dataset]\nchunk_size = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generated_default_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.dataset.chunk_size, 25);
    }
}
