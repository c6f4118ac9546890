//! Test data helpers for creating form and request payloads

use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use event_portal::models::{CreateRegistrationRequest, CreateUserRequest, MembershipType};
use event_portal::services::{RegistrationForm, SignupForm};

/// Random but valid user creation request
pub fn create_user_request() -> CreateUserRequest {
    CreateUserRequest {
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        email: SafeEmail().fake(),
        password: Password(8..16).fake(),
        phone: Some("+1 555 010 2030".to_string()),
        organization: Some(CompanyName().fake()),
        membership_type: Some(MembershipType::Regular),
        is_ieee_member: Some(false),
        ieee_number: None,
    }
}

/// User creation request with a fixed email
pub fn create_user_request_with_email(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        email: email.to_string(),
        ..create_user_request()
    }
}

/// Valid signup form for `email`
pub fn signup_form(email: &str) -> SignupForm {
    let password: String = Password(10..16).fake();
    SignupForm {
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        email: email.to_string(),
        confirm_password: password.clone(),
        password,
        membership_type: MembershipType::Student,
        ..Default::default()
    }
}

/// Registration request for a user and event
pub fn registration_request(user_id: &str, event_id: &str) -> CreateRegistrationRequest {
    CreateRegistrationRequest {
        user_id: user_id.to_string(),
        event_id: event_id.to_string(),
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        email: SafeEmail().fake(),
        phone: None,
        organization: None,
        membership_type: MembershipType::Associate,
        interests: vec!["Artificial Intelligence".to_string(), "Robotics".to_string()],
    }
}

/// Valid registration form for a user and event
pub fn registration_form(user_id: &str, event_id: &str) -> RegistrationForm {
    RegistrationForm {
        user_id: user_id.to_string(),
        event: event_id.to_string(),
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        email: SafeEmail().fake(),
        phone: "555-010-2030".to_string(),
        organization: String::new(),
        membership_type: MembershipType::Regular,
        interests: vec!["Networking".to_string()],
        agree_to_terms: true,
    }
}
