//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the library.

use std::sync::OnceLock;
use rand::Rng;
use regex::Regex;
use uuid::Uuid;
use crate::config::TicketConfig;
use crate::utils::errors::Result;

/// Generate a new UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a display ticket number such as `IEEE-0042`
///
/// Values are drawn uniformly from 0..=9999 and are not checked for collisions.
pub fn generate_ticket_number(prefix: &str) -> String {
    let number: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("{}-{:04}", prefix, number)
}

/// Build the QR code image URL for a ticket token
pub fn build_qr_code_url(config: &TicketConfig, token: &str) -> Result<String> {
    let size = format!("{0}x{0}", config.qr_size);
    let data = format!("{}-TICKET-{}", config.prefix, token);
    let url = url::Url::parse_with_params(
        &config.qr_base_url,
        &[("size", size.as_str()), ("data", data.as_str())],
    )?;
    Ok(url.to_string())
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^\+?[0-9()\-\s]+$").expect("phone pattern is valid"))
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validate phone number format
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Sanitize filename for safe storage
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Drop repeated entries while keeping first-occurrence order
pub fn dedupe_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
