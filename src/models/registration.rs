//! Registration model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::event::Event;
use super::user::MembershipType;

/// Stored registration record, immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub membership_type: MembershipType,
    #[serde(default)]
    pub interests: Vec<String>,
    pub registration_date: DateTime<Utc>,
    pub ticket_number: String,
    pub qr_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    pub user_id: String,
    pub event_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub membership_type: MembershipType,
    pub interests: Vec<String>,
}

/// Values generated once when a registration is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedTicket {
    pub id: String,
    pub ticket_number: String,
    pub qr_code: String,
}

/// A registration paired with its event, when the event still exists
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDetails {
    pub registration: Registration,
    pub event: Option<Event>,
}

impl Registration {
    pub fn from_request(
        request: CreateRegistrationRequest,
        ticket: IssuedTicket,
        registration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ticket.id,
            user_id: request.user_id,
            event_id: request.event_id,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            organization: request.organization,
            membership_type: request.membership_type,
            interests: crate::utils::helpers::dedupe_preserving_order(request.interests),
            registration_date,
            ticket_number: ticket.ticket_number,
            qr_code: ticket.qr_code,
        }
    }
}
