//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the event portal.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{ErrorSeverity, PortalError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer when dropped and must be kept
/// alive for as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| PortalError::Config(format!("Invalid log filter: {}", e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = if config.file_path.is_empty() {
        (None, None)
    } else {
        let file_appender = tracing_appender::rolling::daily(&config.file_path, "event-portal.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking);
        (Some(layer), Some(guard))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| PortalError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: &str, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a completed event registration
pub fn log_registration(registration_id: &str, event_id: &str, user_id: &str, ticket_number: &str) {
    info!(
        registration_id = registration_id,
        event_id = event_id,
        user_id = user_id,
        ticket_number = ticket_number,
        "Event registration recorded"
    );
}

/// Log a failed service call at a level matching its severity
pub fn log_service_error(operation: &str, err: &PortalError) {
    match err.severity() {
        ErrorSeverity::Info => debug!(operation = operation, error = %err, "Request rejected"),
        ErrorSeverity::Warning => warn!(operation = operation, error = %err, "Request failed"),
        ErrorSeverity::Error | ErrorSeverity::Critical => error!(
            operation = operation,
            error = %err,
            severity = %err.severity(),
            recoverable = err.is_recoverable(),
            "Service operation failed"
        ),
    }
}

/// Log storage operations
pub fn log_storage_operation(operation: &str, collection: &str, records: usize, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            collection = collection,
            records = records,
            duration_ms = duration_ms,
            "Storage operation completed"
        );
    } else {
        error!(
            operation = operation,
            collection = collection,
            duration_ms = duration_ms,
            "Storage operation failed"
        );
    }
}
