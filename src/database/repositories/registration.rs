//! Registration repository implementation

use chrono::Utc;
use crate::config::TicketConfig;
use crate::database::store::{Collection, SharedStore, REGISTRATIONS};
use crate::models::registration::{Registration, CreateRegistrationRequest, IssuedTicket};
use crate::utils::errors::PortalError;
use crate::utils::helpers::{build_qr_code_url, generate_ticket_number, generate_uuid};

#[derive(Clone, Debug)]
pub struct RegistrationRepository {
    registrations: Collection<Registration>,
    tickets: TicketConfig,
}

impl RegistrationRepository {
    pub fn new(store: SharedStore, tickets: TicketConfig) -> Self {
        Self {
            registrations: Collection::new(store, REGISTRATIONS),
            tickets,
        }
    }

    /// Generate the id, ticket number and QR code for a new registration
    pub fn issue_ticket(&self) -> Result<IssuedTicket, PortalError> {
        let id = generate_uuid();
        let qr_code = build_qr_code_url(&self.tickets, &id)?;

        Ok(IssuedTicket {
            ticket_number: generate_ticket_number(&self.tickets.prefix),
            qr_code,
            id,
        })
    }

    /// Create a new registration
    pub async fn create(&self, request: CreateRegistrationRequest) -> Result<Registration, PortalError> {
        let registration = Registration::from_request(request, self.issue_ticket()?, Utc::now());
        self.registrations
            .mutate(|registrations| {
                registrations.push(registration.clone());
                Some(())
            })
            .await?;

        Ok(registration)
    }

    /// Find registration by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Registration>, PortalError> {
        let registrations = self.registrations.load().await?;
        Ok(registrations.into_iter().find(|registration| registration.id == id))
    }

    /// Registrations made by a user, in insertion order
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Registration>, PortalError> {
        let registrations = self.registrations.load().await?;
        Ok(registrations
            .into_iter()
            .filter(|registration| registration.user_id == user_id)
            .collect())
    }

    /// Count total registrations
    pub async fn count(&self) -> Result<usize, PortalError> {
        Ok(self.registrations.load().await?.len())
    }
}
