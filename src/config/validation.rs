//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure the settings used by the selected backend are properly configured.

use crate::utils::errors::{PortalError, Result};
use super::{Settings, StorageBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_storage_config(&settings.storage)?;

    match settings.storage.backend {
        StorageBackend::Memory => {}
        StorageBackend::File => validate_file_config(&settings.file)?,
        StorageBackend::Redis => validate_redis_config(&settings.redis)?,
        StorageBackend::Postgres => validate_database_config(&settings.database)?,
    }

    validate_ticket_config(&settings.tickets)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.key_prefix.chars().any(char::is_whitespace) {
        return Err(PortalError::Config(
            "Storage key prefix must not contain whitespace".to_string()
        ));
    }

    Ok(())
}

fn validate_file_config(config: &super::FileStoreConfig) -> Result<()> {
    if config.data_dir.is_empty() {
        return Err(PortalError::Config(
            "Data directory is required for the file backend".to_string()
        ));
    }

    Ok(())
}

/// Validate Redis configuration
fn validate_redis_config(config: &super::RedisConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(PortalError::Config(
            "Redis URL is required".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(PortalError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(PortalError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(PortalError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

fn validate_ticket_config(config: &super::TicketConfig) -> Result<()> {
    if config.prefix.is_empty() {
        return Err(PortalError::Config(
            "Ticket prefix is required".to_string()
        ));
    }

    url::Url::parse(&config.qr_base_url)
        .map_err(|e| PortalError::Config(format!("Invalid QR base URL: {}", e)))?;

    if config.qr_size == 0 {
        return Err(PortalError::Config(
            "QR code size must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PortalError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PortalError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_backend_section_is_checked() {
        let mut settings = Settings::default();
        settings.database.url.clear();
        // Memory backend ignores the database section
        assert!(validate_settings(&settings).is_ok());

        settings.storage.backend = StorageBackend::Postgres;
        assert_matches!(validate_settings(&settings), Err(PortalError::Config(_)));
    }

    #[test]
    fn test_connection_bounds() {
        let mut settings = Settings::default();
        settings.storage.backend = StorageBackend::Postgres;
        settings.database.min_connections = 20;
        assert_matches!(validate_settings(&settings), Err(PortalError::Config(msg)) if msg.contains("Min connections"));
    }

    #[test]
    fn test_ticket_settings() {
        let mut settings = Settings::default();
        settings.tickets.qr_base_url = "not a url".to_string();
        assert_matches!(validate_settings(&settings), Err(PortalError::Config(_)));

        let mut settings = Settings::default();
        settings.tickets.prefix.clear();
        assert_matches!(validate_settings(&settings), Err(PortalError::Config(_)));
    }

    #[test]
    fn test_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(PortalError::Config(msg)) if msg.contains("verbose"));
    }
}
