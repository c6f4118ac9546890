//! File-backed record store
//!
//! Each collection lives in its own JSON document inside the data directory.
//! Writes go to a temporary sibling file which is then renamed over the
//! target, so readers never observe a partially written collection.

use std::io::ErrorKind;
use std::path::PathBuf;
use async_trait::async_trait;
use tracing::debug;
use crate::database::store::{Record, RecordStore};
use crate::utils::errors::Result;
use crate::utils::helpers::sanitize_filename;

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    prefix: String,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>, prefix: &str) -> Self {
        Self {
            root: root.into(),
            prefix: sanitize_filename(prefix),
        }
    }

    /// Path of the JSON document holding a collection
    pub fn collection_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}{}.json", self.prefix, sanitize_filename(name)))
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn read_collection(&self, name: &str) -> Result<Vec<Record>> {
        let path = self.collection_path(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(collection = name, path = %path.display(), "Collection file not found, reading as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_collection(&self, name: &str, records: Vec<Record>) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.collection_path(name);
        let tmp_path = path.with_extension("json.tmp");
        let payload = serde_json::to_vec_pretty(&records)?;

        tokio::fs::write(&tmp_path, payload).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        debug!(collection = name, path = %path.display(), records = records.len(), "Collection file written");
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
