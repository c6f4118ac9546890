//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageConfig,
    pub file: FileStoreConfig,
    pub redis: RedisConfig,
    pub database: DatabaseConfig,
    pub tickets: TicketConfig,
    pub logging: LoggingConfig,
}

/// Which record store backs the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
    Postgres,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Redis => write!(f, "redis"),
            StorageBackend::Postgres => write!(f, "postgres"),
        }
    }
}

/// Record store selection
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Prepended to every collection key
    pub key_prefix: String,
}

/// File backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub data_dir: String,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedisConfig {
    pub url: String,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Ticket number and QR code generation
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TicketConfig {
    pub prefix: String,
    pub qr_base_url: String,
    pub qr_size: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory receiving the daily log files; empty disables file output
    pub file_path: String,
    pub json: bool,
}

impl Settings {
    /// Load settings from defaults, an optional `config` file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("EVENT_PORTAL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Parse settings from an inline TOML document; missing sections take defaults
    pub fn from_toml_str(source: &str) -> Result<Self, crate::utils::errors::PortalError> {
        toml::from_str(source)
            .map_err(|e| crate::utils::errors::PortalError::Config(e.to_string()))
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::PortalError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            file: FileStoreConfig::default(),
            redis: RedisConfig::default(),
            database: DatabaseConfig::default(),
            tickets: TicketConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            key_prefix: "event_portal:".to_string(),
        }
    }
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/event_portal".to_string(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            prefix: "IEEE".to_string(),
            qr_base_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            qr_size: 200,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: String::new(),
            json: false,
        }
    }
}
