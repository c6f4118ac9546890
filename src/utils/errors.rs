//! Error handling for the event portal
//!
//! This module defines the main error type used throughout the library
//! and provides a unified error handling strategy.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Main error type for the event portal
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage initialization failed: {0}")]
    Initialization(String),

    #[error("This email is already registered: {email}")]
    DuplicateEmail { email: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Registration not found: {registration_id}")]
    RegistrationNotFound { registration_id: String },

    #[error("Validation failed: {0}")]
    Validation(FormErrors),
}

/// Result type alias for event portal operations
pub type Result<T> = std::result::Result<T, PortalError>;

impl PortalError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PortalError::Database(_) => true,
            PortalError::Migration(_) => false,
            PortalError::Redis(_) => true,
            PortalError::Serialization(_) => false,
            PortalError::Io(_) => true,
            PortalError::UrlParse(_) => false,
            PortalError::Config(_) => false,
            PortalError::Storage(_) => true,
            PortalError::Initialization(_) => true,
            PortalError::DuplicateEmail { .. } => false,
            PortalError::InvalidCredentials => false,
            PortalError::UserNotFound { .. } => false,
            PortalError::EventNotFound { .. } => false,
            PortalError::RegistrationNotFound { .. } => false,
            PortalError::Validation(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortalError::Migration(_) => ErrorSeverity::Critical,
            PortalError::Config(_) => ErrorSeverity::Critical,
            PortalError::Initialization(_) => ErrorSeverity::Critical,
            PortalError::DuplicateEmail { .. } => ErrorSeverity::Info,
            PortalError::Validation(_) => ErrorSeverity::Info,
            PortalError::InvalidCredentials => ErrorSeverity::Warning,
            PortalError::UserNotFound { .. } => ErrorSeverity::Warning,
            PortalError::EventNotFound { .. } => ErrorSeverity::Warning,
            PortalError::RegistrationNotFound { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Message suitable for showing to the person filling in a form
    pub fn user_message(&self) -> String {
        match self {
            PortalError::DuplicateEmail { .. } => {
                "This email is already registered. Please login instead.".to_string()
            }
            PortalError::InvalidCredentials => "Invalid email or password".to_string(),
            PortalError::Validation(errors) => errors.to_string(),
            PortalError::Initialization(_) => {
                "Storage initialization error. Please try again later.".to_string()
            }
            PortalError::EventNotFound { .. } => "Event not found".to_string(),
            PortalError::RegistrationNotFound { .. } => "Registration not found".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Field-level validation failures, keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field; the first message per field wins
    pub fn add(&mut self, field: &str, message: &str) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Turn the collected failures into a result
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(PortalError::Validation(self))
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
