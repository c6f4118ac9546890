//! Services module
//!
//! This module contains the data service facade and the business logic
//! services built on it

pub mod data;
pub mod registration;
pub mod user;

// Re-export commonly used services
pub use data::DataService;
pub use registration::{RegistrationForm, RegistrationService};
pub use user::{SignupForm, UserService};

use crate::config::settings::Settings;
use crate::database::{create_store, DatabaseService};
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub data: DataService,
    pub user_service: UserService,
    pub registration_service: RegistrationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory around an existing facade
    pub fn new(data: DataService) -> Self {
        Self {
            user_service: UserService::new(data.clone()),
            registration_service: RegistrationService::new(data.clone()),
            data,
        }
    }

    /// Open the configured store and build every service on top of it
    pub async fn from_settings(settings: &Settings) -> Result<Self> {
        let store = create_store(settings).await?;
        let database = DatabaseService::new(store, settings.tickets.clone());
        Ok(Self::new(DataService::new(database)))
    }

    /// Health check for all services
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let storage_healthy = self.data.connect_to_storage().await.unwrap_or(false);

        ServiceHealthStatus {
            backend: self.data.backend_name(),
            storage_healthy,
            initialized: self.data.is_initialized(),
        }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub backend: &'static str,
    pub storage_healthy: bool,
    pub initialized: bool,
}

impl ServiceHealthStatus {
    /// Check if storage is usable
    pub fn is_healthy(&self) -> bool {
        self.storage_healthy && self.initialized
    }

    /// Get list of problems
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.storage_healthy {
            issues.push(format!("{} storage is not reachable", self.backend));
        }
        if !self.initialized {
            issues.push("Storage has not been initialized".to_string());
        }

        issues
    }
}
