//! Configuration management for the climate API
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and validates the result before the server starts.

use crate::ClimateApiError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `CLIMATE_API_DATABASE__PATH`
const ENV_PREFIX: &str = "CLIMATE_API";

/// Root configuration structure for the climate API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClimateApiConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Observation database settings
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Observation database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite file holding the `measurement` and `station` tables
    #[serde(default = "default_database_path")]
    pub path: String,
    /// Upper bound on pooled read-only connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// How long a request waits for a free connection
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_path() -> String {
    "Resources/hawaii.sqlite".to_string()
}

fn default_max_connections() -> u32 {
    4
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
            acquire_timeout_seconds: default_acquire_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ServerConfig {
    /// Address string handed to the TCP listener
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }
}

impl ClimateApiConfig {
    /// Load configuration from `config.toml` and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: ClimateApiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.database.path.is_empty() {
            self.database.path = default_database_path();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_server()?;
        self.validate_database()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ClimateApiError::config("Server port must be greater than 0").into());
        }
        Ok(())
    }

    fn validate_database(&self) -> Result<()> {
        if self.database.path.trim().is_empty() {
            return Err(ClimateApiError::config("Database path cannot be empty").into());
        }

        if self.database.max_connections == 0 {
            return Err(
                ClimateApiError::config("Database max connections must be at least 1").into(),
            );
        }

        if self.database.max_connections > 64 {
            return Err(
                ClimateApiError::config("Database max connections cannot exceed 64").into(),
            );
        }

        if self.database.acquire_timeout_seconds > 300 {
            return Err(ClimateApiError::config(
                "Database acquire timeout cannot exceed 300 seconds",
            )
            .into());
        }

        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ClimateApiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ClimateApiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
