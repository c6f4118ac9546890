//! Registration service implementation
//!
//! Validates event registration forms, stores registrations for known users
//! and joins them with their events for the profile and confirmation pages.

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::models::registration::{CreateRegistrationRequest, Registration, RegistrationDetails};
use crate::models::user::MembershipType;
use crate::services::data::DataService;
use crate::utils::errors::{FormErrors, PortalError, Result};
use crate::utils::helpers::{is_valid_email, is_valid_phone};
use crate::utils::logging::log_registration;

/// Fields submitted on the event registration page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub user_id: String,
    /// Selected event id; empty when nothing was selected
    pub event: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub membership_type: MembershipType,
    pub interests: Vec<String>,
    pub agree_to_terms: bool,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FormErrors::new();

        if self.user_id.trim().is_empty() {
            errors.add("userId", "Please log in to register for an event");
        }
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
        if !self.phone.is_empty() && !is_valid_phone(&self.phone) {
            errors.add("phone", "Phone number format is invalid");
        }
        if self.event.is_empty() {
            errors.add("event", "Please select an event");
        }
        if !self.agree_to_terms {
            errors.add("agreeToTerms", "You must agree to the terms and conditions");
        }

        errors.into_result()
    }

    fn into_request(self) -> CreateRegistrationRequest {
        CreateRegistrationRequest {
            user_id: self.user_id,
            event_id: self.event,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: Some(self.phone).filter(|phone| !phone.is_empty()),
            organization: Some(self.organization).filter(|org| !org.is_empty()),
            membership_type: self.membership_type,
            interests: self.interests,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RegistrationService {
    data: DataService,
}

impl RegistrationService {
    pub fn new(data: DataService) -> Self {
        Self { data }
    }

    /// Validate the form and store the registration for an existing user
    pub async fn register(&self, form: RegistrationForm) -> Result<Registration> {
        form.validate()?;

        if self.data.get_user_by_id(&form.user_id).await?.is_none() {
            warn!(user_id = %form.user_id, "Registration attempted for unknown user");
            return Err(PortalError::UserNotFound { user_id: form.user_id });
        }

        let registration = self.data.create_registration(form.into_request()).await?;
        log_registration(
            &registration.id,
            &registration.event_id,
            &registration.user_id,
            &registration.ticket_number,
        );

        Ok(registration)
    }

    /// Every registration of a user joined with its event
    ///
    /// A registration whose event no longer exists is still listed, with no event.
    pub async fn registrations_for_user(&self, user_id: &str) -> Result<Vec<RegistrationDetails>> {
        let registrations = self.data.get_registrations_by_user_id(user_id).await?;
        debug!(user_id = user_id, count = registrations.len(), "Fetching event details for registrations");

        try_join_all(registrations.into_iter().map(|registration| self.with_event(registration))).await
    }

    /// Registration and event shown on the confirmation page
    ///
    /// Unlike the per-user listing, both records must exist.
    pub async fn confirmation(&self, registration_id: &str) -> Result<RegistrationDetails> {
        let registration = self
            .data
            .get_registration_by_id(registration_id)
            .await?
            .ok_or_else(|| PortalError::RegistrationNotFound {
                registration_id: registration_id.to_string(),
            })?;

        let event = self
            .data
            .get_event_by_id(&registration.event_id)
            .await?
            .ok_or_else(|| PortalError::EventNotFound {
                event_id: registration.event_id.clone(),
            })?;

        Ok(RegistrationDetails {
            registration,
            event: Some(event),
        })
    }

    async fn with_event(&self, registration: Registration) -> Result<RegistrationDetails> {
        let event = self.data.get_event_by_id(&registration.event_id).await?;
        if event.is_none() {
            warn!(registration_id = %registration.id, event_id = %registration.event_id, "Registration references a missing event");
        }

        Ok(RegistrationDetails { registration, event })
    }
}
