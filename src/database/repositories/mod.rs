//! Database repositories module
//!
//! This module contains the typed repositories over each record collection

pub mod user;
pub mod event;
pub mod registration;

// Re-export repositories
pub use user::UserRepository;
pub use event::EventRepository;
pub use registration::RegistrationRepository;
