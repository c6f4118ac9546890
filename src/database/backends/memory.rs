//! In-process record store, used for tests and demos

use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::database::store::{Record, RecordStore};
use crate::utils::errors::Result;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the collections written so far
    pub async fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn read_collection(&self, name: &str) -> Result<Vec<Record>> {
        Ok(self
            .collections
            .read()
            .await
            .get(name)
            .cloned()
            .unwrap_or_default())
    }

    async fn write_collection(&self, name: &str, records: Vec<Record>) -> Result<()> {
        self.collections.write().await.insert(name.to_string(), records);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_collection_reads_empty() {
        let store = MemoryStore::new();
        assert!(store.read_collection("users").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_replaces_collection() {
        let store = MemoryStore::new();
        store
            .write_collection("events", vec![json!({"id": "1"}), json!({"id": "2"})])
            .await
            .unwrap();
        store
            .write_collection("events", vec![json!({"id": "3"})])
            .await
            .unwrap();

        let records = store.read_collection("events").await.unwrap();
        assert_eq!(records, vec![json!({"id": "3"})]);
        assert_eq!(store.collection_names().await, vec!["events"]);
    }
}
