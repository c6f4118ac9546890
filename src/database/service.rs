//! Database service layer
//!
//! This module provides the persistence adapter: typed CRUD over users,
//! events and registrations, plus the one-time seeding of sample events.

use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};
use crate::config::TicketConfig;
use crate::database::repositories::{EventRepository, RegistrationRepository, UserRepository};
use crate::database::seed::sample_events;
use crate::database::store::SharedStore;
use crate::models::*;
use crate::utils::errors::PortalError;

#[derive(Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub events: EventRepository,
    pub registrations: RegistrationRepository,
    store: SharedStore,
    initialized: Arc<OnceCell<()>>,
}

impl DatabaseService {
    pub fn new(store: SharedStore, tickets: TicketConfig) -> Self {
        Self {
            users: UserRepository::new(Arc::clone(&store)),
            events: EventRepository::new(Arc::clone(&store)),
            registrations: RegistrationRepository::new(Arc::clone(&store), tickets),
            store,
            initialized: Arc::new(OnceCell::new()),
        }
    }

    /// Seed the sample events on first use
    ///
    /// Concurrent callers share one in-flight initialization. A failure leaves
    /// the service uninitialized so a later call can try again.
    pub async fn initialize(&self) -> Result<(), PortalError> {
        self.initialized
            .get_or_try_init(|| async {
                match self.events.seed_if_empty(sample_events()).await {
                    Ok(seeded) => {
                        info!(backend = self.store.backend_name(), seeded = seeded, "Storage initialized successfully");
                        Ok(())
                    }
                    Err(e) => {
                        error!(backend = self.store.backend_name(), error = %e, "Storage initialization failed");
                        Err(PortalError::Initialization(e.to_string()))
                    }
                }
            })
            .await?;

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.initialized()
    }

    /// Create a user; does not check for an existing email
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, PortalError> {
        self.initialize().await?;
        let user = self.users.create(request).await?;
        debug!(user_id = %user.id, "New user created");
        Ok(user)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, PortalError> {
        self.initialize().await?;
        self.users.find_by_email(email).await
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<Option<User>, PortalError> {
        self.initialize().await?;
        self.users.find_by_id(user_id).await
    }

    pub async fn update_user(&self, user_id: &str, request: UpdateUserRequest) -> Result<Option<User>, PortalError> {
        self.initialize().await?;
        let updated = self.users.update(user_id, request).await?;
        if updated.is_none() {
            debug!(user_id = user_id, "User not found for update");
        }
        Ok(updated)
    }

    pub async fn get_events(&self) -> Result<Vec<Event>, PortalError> {
        self.initialize().await?;
        self.events.list().await
    }

    pub async fn get_event_by_id(&self, event_id: &str) -> Result<Option<Event>, PortalError> {
        self.initialize().await?;
        self.events.find_by_id(event_id).await
    }

    /// Store a registration with a freshly issued ticket number and QR code
    pub async fn create_registration(&self, request: CreateRegistrationRequest) -> Result<Registration, PortalError> {
        self.initialize().await?;
        self.registrations.create(request).await
    }

    pub async fn get_registrations_by_user_id(&self, user_id: &str) -> Result<Vec<Registration>, PortalError> {
        self.initialize().await?;
        self.registrations.find_by_user_id(user_id).await
    }

    pub async fn get_registration_by_id(&self, registration_id: &str) -> Result<Option<Registration>, PortalError> {
        self.initialize().await?;
        self.registrations.find_by_id(registration_id).await
    }

    /// Initialize and check that the store answers
    pub async fn connect_to_storage(&self) -> Result<bool, PortalError> {
        self.initialize().await?;
        self.store.ping().await?;
        Ok(true)
    }

    /// Record counts per collection
    pub async fn get_stats(&self) -> Result<serde_json::Value, PortalError> {
        self.initialize().await?;

        let stats = serde_json::json!({
            "backend": self.store.backend_name(),
            "users": self.users.count().await?,
            "events": self.events.count().await?,
            "registrations": self.registrations.count().await?,
        });

        Ok(stats)
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }
}

impl std::fmt::Debug for DatabaseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseService")
            .field("backend", &self.store.backend_name())
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
