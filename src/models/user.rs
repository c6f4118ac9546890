//! User model

use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, Utc};

/// Membership tier offered on the signup and registration forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipType {
    #[default]
    Regular,
    Student,
    Associate,
    Senior,
    Fellow,
}

impl std::fmt::Display for MembershipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MembershipType::Regular => "Regular Member",
            MembershipType::Student => "Student Member",
            MembershipType::Associate => "Associate Member",
            MembershipType::Senior => "Senior Member",
            MembershipType::Fellow => "Fellow",
        };
        write!(f, "{}", label)
    }
}

/// Stored user record. The password is kept in plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_type: Option<MembershipType>,
    #[serde(rename = "isIEEEMember", default, skip_serializing_if = "Option::is_none")]
    pub is_ieee_member: Option<bool>,
    #[serde(rename = "ieeeNumber", default, skip_serializing_if = "Option::is_none")]
    pub ieee_number: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub membership_type: Option<MembershipType>,
    #[serde(rename = "isIEEEMember")]
    pub is_ieee_member: Option<bool>,
    #[serde(rename = "ieeeNumber")]
    pub ieee_number: Option<String>,
}

/// Partial update; `None` leaves the stored value untouched
///
/// Optional profile fields take `Some(None)` to clear the stored value. In
/// JSON an absent key leaves the field alone and an explicit `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub organization: Option<Option<String>>,
    pub membership_type: Option<MembershipType>,
    #[serde(rename = "isIEEEMember")]
    pub is_ieee_member: Option<bool>,
    #[serde(rename = "ieeeNumber", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub ieee_number: Option<Option<String>>,
}

/// A key that is present, `null` included, becomes `Some`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A user as handed to the presentation layer, without the password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub membership_type: Option<MembershipType>,
    #[serde(rename = "isIEEEMember")]
    pub is_ieee_member: Option<bool>,
    #[serde(rename = "ieeeNumber")]
    pub ieee_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build the stored record for a new user
    pub fn from_request(id: String, request: CreateUserRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
            phone: request.phone,
            organization: request.organization,
            membership_type: request.membership_type,
            is_ieee_member: request.is_ieee_member,
            ieee_number: request.ieee_number,
            created_at,
            updated_at: None,
        }
    }

    /// Merge a partial update over this record and stamp `updated_at`
    pub fn apply(&mut self, patch: UpdateUserRequest, now: DateTime<Utc>) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(organization) = patch.organization {
            self.organization = organization;
        }
        if patch.membership_type.is_some() {
            self.membership_type = patch.membership_type;
        }
        if patch.is_ieee_member.is_some() {
            self.is_ieee_member = patch.is_ieee_member;
        }
        if let Some(ieee_number) = patch.ieee_number {
            self.ieee_number = ieee_number;
        }
        self.updated_at = Some(now);
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            organization: user.organization,
            membership_type: user.membership_type,
            is_ieee_member: user.is_ieee_member,
            ieee_number: user.ieee_number,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
