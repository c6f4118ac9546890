//! Data models module
//!
//! This module contains all data structures persisted by the portal

pub mod user;
pub mod event;
pub mod registration;

// Re-export commonly used models
pub use user::{User, UserProfile, CreateUserRequest, UpdateUserRequest, MembershipType};
pub use event::Event;
pub use registration::{Registration, CreateRegistrationRequest, RegistrationDetails, IssuedTicket};
