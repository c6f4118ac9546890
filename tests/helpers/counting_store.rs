//! Record store wrapper that counts reads and writes per collection

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use event_portal::database::{Record, RecordStore};
use event_portal::Result;

/// Delegates to an inner store while counting calls
///
/// An optional read delay widens the window in which concurrent callers
/// overlap, which makes single-flight behaviour observable.
pub struct CountingStore {
    inner: Arc<dyn RecordStore>,
    read_delay: Option<Duration>,
    reads: Mutex<HashMap<String, usize>>,
    writes: Mutex<HashMap<String, usize>>,
}

impl CountingStore {
    pub fn new(inner: Arc<dyn RecordStore>) -> Self {
        Self {
            inner,
            read_delay: None,
            reads: Mutex::new(HashMap::new()),
            writes: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = Some(delay);
        self
    }

    pub fn reads(&self, collection: &str) -> usize {
        self.reads.lock().unwrap().get(collection).copied().unwrap_or(0)
    }

    pub fn writes(&self, collection: &str) -> usize {
        self.writes.lock().unwrap().get(collection).copied().unwrap_or(0)
    }
}

#[async_trait]
impl RecordStore for CountingStore {
    async fn read_collection(&self, name: &str) -> Result<Vec<Record>> {
        *self.reads.lock().unwrap().entry(name.to_string()).or_insert(0) += 1;
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.read_collection(name).await
    }

    async fn write_collection(&self, name: &str, records: Vec<Record>) -> Result<()> {
        *self.writes.lock().unwrap().entry(name.to_string()).or_insert(0) += 1;
        self.inner.write_collection(name, records).await
    }

    async fn ping(&self) -> Result<()> {
        self.inner.ping().await
    }

    fn backend_name(&self) -> &'static str {
        "counting"
    }
}

/// Store whose every call fails, standing in for an unavailable backend
pub struct UnavailableStore;

#[async_trait]
impl RecordStore for UnavailableStore {
    async fn read_collection(&self, _name: &str) -> Result<Vec<Record>> {
        Err(event_portal::PortalError::Storage("backend offline".to_string()))
    }

    async fn write_collection(&self, _name: &str, _records: Vec<Record>) -> Result<()> {
        Err(event_portal::PortalError::Storage("backend offline".to_string()))
    }

    async fn ping(&self) -> Result<()> {
        Err(event_portal::PortalError::Storage("backend offline".to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "unavailable"
    }
}
