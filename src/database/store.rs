//! Key-value record store
//!
//! A store maps a collection name to an ordered list of JSON records. Writes
//! replace a whole collection at once; there are no cross-collection
//! transactions.
//!
//! Read-modify-write cycles go through [`Collection::mutate`], which
//! serializes writers sharing one `Collection` handle. Separately built
//! handles over the same store, or several processes sharing a backend, are
//! not coordinated and the last write wins.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;
use async_trait::async_trait;
use tokio::sync::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use crate::utils::errors::Result;
use crate::utils::logging::log_storage_operation;

/// A single record as a flat JSON field map
pub type Record = serde_json::Value;

pub const USERS: &str = "users";
pub const EVENTS: &str = "events";
pub const REGISTRATIONS: &str = "registrations";

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read a collection; an absent collection reads as empty
    async fn read_collection(&self, name: &str) -> Result<Vec<Record>>;

    /// Replace the whole collection
    async fn write_collection(&self, name: &str, records: Vec<Record>) -> Result<()>;

    /// Check that the backend is reachable
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    /// Short backend label for logs
    fn backend_name(&self) -> &'static str;
}

/// Store handle shared by every repository
pub type SharedStore = Arc<dyn RecordStore>;

/// Typed view over one named collection
pub struct Collection<T> {
    store: SharedStore,
    name: &'static str,
    write_lock: Arc<Mutex<()>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            name: self.name,
            write_lock: Arc::clone(&self.write_lock),
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("backend", &self.store.backend_name())
            .finish()
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: SharedStore, name: &'static str) -> Self {
        Self {
            store,
            name,
            write_lock: Arc::new(Mutex::new(())),
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Load and decode every record of the collection
    pub async fn load(&self) -> Result<Vec<T>> {
        let started = Instant::now();
        let result = self.store.read_collection(self.name).await.and_then(|records| {
            records
                .into_iter()
                .map(|record| serde_json::from_value(record).map_err(Into::into))
                .collect::<Result<Vec<T>>>()
        });

        let count = result.as_ref().map(Vec::len).unwrap_or(0);
        log_storage_operation("read", self.name, count, elapsed_ms(started), result.is_ok());
        result
    }

    /// Encode and persist the full collection
    pub async fn save(&self, items: &[T]) -> Result<()> {
        let started = Instant::now();
        let records = items
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<Record>, _>>()?;

        let result = self.store.write_collection(self.name, records).await;
        log_storage_operation("write", self.name, items.len(), elapsed_ms(started), result.is_ok());
        result
    }

    /// Load, change and save the collection while holding the write lock
    ///
    /// `change` returns `None` to leave the stored collection untouched.
    pub async fn mutate<R, F>(&self, change: F) -> Result<Option<R>>
    where
        F: FnOnce(&mut Vec<T>) -> Option<R>,
    {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load().await?;
        let Some(result) = change(&mut items) else {
            return Ok(None);
        };

        self.save(&items).await?;
        Ok(Some(result))
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
