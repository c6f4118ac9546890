//! Event model

use serde::{Deserialize, Serialize};

/// Catalogue entry. `date` is a display string, not a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub location: String,
    pub category: String,
    pub image: String,
    pub description: String,
}

impl Event {
    pub fn is_virtual(&self) -> bool {
        self.location.eq_ignore_ascii_case("virtual")
    }
}
