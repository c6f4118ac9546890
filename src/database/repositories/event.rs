//! Event repository implementation

use tracing::info;
use crate::database::store::{Collection, SharedStore, EVENTS};
use crate::models::event::Event;
use crate::utils::errors::PortalError;

#[derive(Clone, Debug)]
pub struct EventRepository {
    events: Collection<Event>,
}

impl EventRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            events: Collection::new(store, EVENTS),
        }
    }

    /// List events in insertion order
    pub async fn list(&self) -> Result<Vec<Event>, PortalError> {
        self.events.load().await
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Event>, PortalError> {
        let events = self.events.load().await?;
        Ok(events.into_iter().find(|event| event.id == id))
    }

    /// Write `events` only when the collection is empty; returns whether it seeded
    pub async fn seed_if_empty(&self, events: Vec<Event>) -> Result<bool, PortalError> {
        let count = events.len();
        let seeded = self
            .events
            .mutate(|stored| {
                if !stored.is_empty() {
                    return None;
                }
                *stored = events;
                Some(())
            })
            .await?
            .is_some();

        if seeded {
            info!(count = count, "Seeded sample events");
        }
        Ok(seeded)
    }

    /// Count total events
    pub async fn count(&self) -> Result<usize, PortalError> {
        Ok(self.events.load().await?.len())
    }
}
