//! Test context for unified test setup
//!
//! Builds the facade and services over a chosen record store.

use std::sync::{Arc, Once};

use event_portal::config::TicketConfig;
use event_portal::database::backends::{FileStore, MemoryStore};
use event_portal::database::{DatabaseService, SharedStore};
use event_portal::services::{DataService, ServiceFactory};
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize test logging once
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("event_portal=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Services wired over a single store
pub struct TestContext {
    pub store: SharedStore,
    pub services: ServiceFactory,
    pub temp_dir: Option<TempDir>,
}

impl TestContext {
    /// Context over a fresh in-memory store
    pub fn memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Context over a file store in a fresh temporary directory
    pub fn file() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store: SharedStore = Arc::new(FileStore::new(temp_dir.path(), "event_portal:"));
        let mut ctx = Self::with_store(store);
        ctx.temp_dir = Some(temp_dir);
        ctx
    }

    /// Context over an arbitrary store
    pub fn with_store(store: SharedStore) -> Self {
        init_test_env();
        let services = ServiceFactory::new(data_service(Arc::clone(&store)));
        Self {
            store,
            services,
            temp_dir: None,
        }
    }

    pub fn data(&self) -> &DataService {
        &self.services.data
    }

    /// A second, independent facade over the same store
    pub fn reopen(&self) -> DataService {
        data_service(Arc::clone(&self.store))
    }
}

/// Facade over `store` with default ticket settings
pub fn data_service(store: SharedStore) -> DataService {
    DataService::new(DatabaseService::new(store, TicketConfig::default()))
}
