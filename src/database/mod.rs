//! Database module
//!
//! This module handles record store backends and typed data access

pub mod backends;
pub mod connection;
pub mod repositories;
pub mod seed;
pub mod service;
pub mod store;

// Re-export commonly used database components
pub use connection::{DatabasePool, DatabaseConfig, create_pool, create_store, run_migrations, health_check};
pub use repositories::{UserRepository, EventRepository, RegistrationRepository};
pub use service::DatabaseService;
pub use store::{Collection, Record, RecordStore, SharedStore};
