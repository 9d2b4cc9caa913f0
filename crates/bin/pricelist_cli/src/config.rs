//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `pricelist.toml` in the working directory. Every field has a
//! default so the file is optional, but the source URL must come from the
//! file or the environment. Environment variables take precedence over file
//! values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote tabular source settings.
    pub source: SourceConfig,
    /// Cache tuning.
    pub cache: CacheConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Remote source endpoint configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the tabular API.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
}

/// Cache tuning.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Freshness window in seconds.
    pub ttl_secs: i64,
    /// Rows requested per page during a reload.
    pub chunk_size: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `pricelist.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("pricelist.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PRICELIST_SOURCE_URL") {
            self.source.base_url = val;
        }
        if let Ok(val) = std::env::var("PRICELIST_SOURCE_KEY") {
            self.source.api_key = val;
        }
        if let Ok(val) = std::env::var("PRICELIST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "source.base_url must be set".to_string(),
            ));
        }
        if self.cache.ttl_secs <= 0 {
            return Err(ConfigError::Validation(
                "cache.ttl_secs must be positive".to_string(),
            ));
        }
        if self.cache.chunk_size == 0 {
            return Err(ConfigError::Validation(
                "cache.chunk_size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 300,
            chunk_size: 1000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "pricelist=info,pricelist_app=info,pricelist_adapter_source_rest=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
