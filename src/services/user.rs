//! User service implementation
//!
//! This service handles sign-up, log-in and profile management. It owns the
//! duplicate-email check: storage accepts any user it is given, so every
//! path that creates a user or changes an email looks the address up first.

use serde::{Deserialize, Serialize};
use tracing::{info, warn, debug};
use crate::models::user::{MembershipType, UpdateUserRequest, CreateUserRequest, UserProfile, User};
use crate::services::data::DataService;
use crate::utils::errors::{FormErrors, PortalError, Result};
use crate::utils::helpers::is_valid_email;
use crate::utils::logging::{log_service_error, log_user_action};

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Fields submitted on the signup page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub membership_type: MembershipType,
    #[serde(rename = "isIEEEMember")]
    pub is_ieee_member: Option<bool>,
    #[serde(rename = "ieeeNumber")]
    pub ieee_number: Option<String>,
}

impl SignupForm {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FormErrors::new();

        if self.first_name.trim().is_empty() {
            errors.add("firstName", "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.add("lastName", "Last name is required");
        }
        if self.email.trim().is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add("email", "Email is invalid");
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.add("password", "Password must be at least 8 characters");
        }
        if self.password != self.confirm_password {
            errors.add("confirmPassword", "Passwords do not match");
        }

        errors.into_result()
    }

    fn into_request(self) -> CreateUserRequest {
        CreateUserRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            phone: self.phone.filter(|phone| !phone.trim().is_empty()),
            organization: self.organization.filter(|org| !org.trim().is_empty()),
            membership_type: Some(self.membership_type),
            is_ieee_member: self.is_ieee_member,
            ieee_number: self.ieee_number,
        }
    }
}

/// User service for managing accounts
#[derive(Clone, Debug)]
pub struct UserService {
    data: DataService,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(data: DataService) -> Self {
        Self { data }
    }

    /// Register a new account; fails with `DuplicateEmail` when the address is taken
    pub async fn sign_up(&self, form: SignupForm) -> Result<UserProfile> {
        form.validate()?;
        debug!(email = %form.email, "Attempting to sign up user");

        if self.data.get_user_by_email(&form.email).await?.is_some() {
            let err = PortalError::DuplicateEmail { email: form.email };
            log_service_error("sign_up", &err);
            return Err(err);
        }

        let user = self.data.create_user(form.into_request()).await?;
        log_user_action(&user.id, "sign_up", Some(&user.email));
        info!(user_id = %user.id, "New user registered successfully");

        Ok(user.into())
    }

    /// Check an email/password pair against the stored plain-text password
    pub async fn log_in(&self, email: &str, password: &str) -> Result<UserProfile> {
        let mut errors = FormErrors::new();
        if email.trim().is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(email) {
            errors.add("email", "Email is invalid");
        }
        if password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.into_result()?;

        match self.data.get_user_by_email(email).await? {
            Some(user) if user.password == password => {
                log_user_action(&user.id, "log_in", None);
                Ok(user.into())
            }
            _ => {
                warn!(email = email, "Invalid login attempt");
                Err(PortalError::InvalidCredentials)
            }
        }
    }

    /// Profile for the account with this email
    pub async fn profile(&self, email: &str) -> Result<Option<UserProfile>> {
        Ok(self.data.get_user_by_email(email).await?.map(UserProfile::from))
    }

    /// Full stored record by id
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        self.data
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| PortalError::UserNotFound { user_id: user_id.to_string() })
    }

    /// Apply a profile edit, rejecting an email that belongs to someone else
    pub async fn update_profile(&self, user_id: &str, update: UpdateUserRequest) -> Result<UserProfile> {
        debug!(user_id = user_id, "Updating user profile");

        if let Some(email) = update.email.as_deref() {
            if !is_valid_email(email) {
                let mut errors = FormErrors::new();
                errors.add("email", "Email is invalid");
                return Err(PortalError::Validation(errors));
            }
            if let Some(owner) = self.data.get_user_by_email(email).await? {
                if owner.id != user_id {
                    return Err(PortalError::DuplicateEmail { email: email.to_string() });
                }
            }
        }

        let user = self
            .data
            .update_user(user_id, update)
            .await?
            .ok_or_else(|| PortalError::UserNotFound { user_id: user_id.to_string() })?;

        log_user_action(&user.id, "update_profile", None);
        Ok(user.into())
    }
}
