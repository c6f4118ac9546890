//! Event Portal
//!
//! Data-access and service layer for an event registration portal.
//! This library provides pluggable record stores, typed persistence for
//! users, events and registrations, a lazily-initializing data service
//! facade, and the sign-up, log-in and registration services built on it.

pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PortalError, Result};

// Re-export main components for easy access
pub use database::{DatabaseService, RecordStore, SharedStore};
pub use services::{DataService, ServiceFactory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
