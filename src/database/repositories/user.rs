//! User repository implementation

use chrono::Utc;
use crate::database::store::{Collection, SharedStore, USERS};
use crate::models::user::{User, CreateUserRequest, UpdateUserRequest};
use crate::utils::errors::PortalError;
use crate::utils::helpers::generate_uuid;

#[derive(Clone, Debug)]
pub struct UserRepository {
    users: Collection<User>,
}

impl UserRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            users: Collection::new(store, USERS),
        }
    }

    /// Create a new user. Email uniqueness is the caller's responsibility.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, PortalError> {
        let user = User::from_request(generate_uuid(), request, Utc::now());
        self.users
            .mutate(|users| {
                users.push(user.clone());
                Some(())
            })
            .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, PortalError> {
        let users = self.users.load().await?;
        Ok(users.into_iter().find(|user| user.id == id))
    }

    /// Find the first user with exactly this email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, PortalError> {
        let users = self.users.load().await?;
        Ok(users.into_iter().find(|user| user.email == email))
    }

    /// Merge a partial update; `None` when the id is unknown, in which case nothing is written
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<Option<User>, PortalError> {
        self.users
            .mutate(|users| {
                let user = users.iter_mut().find(|user| user.id == id)?;
                user.apply(request, Utc::now());
                Some(user.clone())
            })
            .await
    }

    /// Count total users
    pub async fn count(&self) -> Result<usize, PortalError> {
        Ok(self.users.load().await?.len())
    }
}
