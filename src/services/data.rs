//! Data service facade
//!
//! Single entry point for the presentation layer. Every operation makes sure
//! storage is initialized first, so callers never sequence initialization
//! themselves. Operations map one-to-one onto [`DatabaseService`].

use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::error;
use crate::database::DatabaseService;
use crate::models::*;
use crate::utils::errors::Result;

#[derive(Clone, Debug)]
pub struct DataService {
    database: DatabaseService,
    initialized: Arc<OnceCell<()>>,
}

impl DataService {
    pub fn new(database: DatabaseService) -> Self {
        Self {
            database,
            initialized: Arc::new(OnceCell::new()),
        }
    }

    /// Initialize the storage connection once; concurrent first calls share the work
    pub async fn initialize(&self) -> Result<()> {
        self.initialized
            .get_or_try_init(|| async {
                self.database.initialize().await.map_err(|e| {
                    error!(error = %e, "Initialization error");
                    e
                })
            })
            .await?;

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.initialized()
    }

    pub fn backend_name(&self) -> &'static str {
        self.database.backend_name()
    }

    // User operations

    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        self.initialize().await?;
        self.database.create_user(request).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.initialize().await?;
        self.database.get_user_by_email(email).await
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<Option<User>> {
        self.initialize().await?;
        self.database.get_user_by_id(user_id).await
    }

    pub async fn update_user(&self, user_id: &str, request: UpdateUserRequest) -> Result<Option<User>> {
        self.initialize().await?;
        self.database.update_user(user_id, request).await
    }

    // Event operations

    pub async fn get_events(&self) -> Result<Vec<Event>> {
        self.initialize().await?;
        self.database.get_events().await
    }

    pub async fn get_event_by_id(&self, event_id: &str) -> Result<Option<Event>> {
        self.initialize().await?;
        self.database.get_event_by_id(event_id).await
    }

    // Registration operations

    pub async fn create_registration(&self, request: CreateRegistrationRequest) -> Result<Registration> {
        self.initialize().await?;
        self.database.create_registration(request).await
    }

    pub async fn get_registrations_by_user_id(&self, user_id: &str) -> Result<Vec<Registration>> {
        self.initialize().await?;
        self.database.get_registrations_by_user_id(user_id).await
    }

    pub async fn get_registration_by_id(&self, registration_id: &str) -> Result<Option<Registration>> {
        self.initialize().await?;
        self.database.get_registration_by_id(registration_id).await
    }

    /// Test the connection to storage
    pub async fn connect_to_storage(&self) -> Result<bool> {
        self.initialize().await?;
        self.database.connect_to_storage().await
    }

    pub async fn get_stats(&self) -> Result<serde_json::Value> {
        self.initialize().await?;
        self.database.get_stats().await
    }
}
