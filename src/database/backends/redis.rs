//! Redis-backed record store
//!
//! Each collection is stored as one JSON string under `<prefix><name>`;
//! a single `SET` replaces it.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, error};
use crate::config::RedisConfig;
use crate::database::store::{Record, RecordStore};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct RedisStore {
    connection_manager: redis::aio::ConnectionManager,
    prefix: String,
}

impl RedisStore {
    /// Connect to Redis and create a store instance
    pub async fn new(config: &RedisConfig, prefix: &str) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            prefix: prefix.to_string(),
        })
    }

    fn collection_key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

#[async_trait]
impl RecordStore for RedisStore {
    async fn read_collection(&self, name: &str) -> Result<Vec<Record>> {
        let key = self.collection_key(name);
        let mut conn = self.connection_manager.clone();

        let serialized: Option<String> = match conn.get(&key).await {
            Ok(data) => data,
            Err(e) => {
                error!(key = %key, error = %e, "Failed to read collection from Redis");
                return Err(e.into());
            }
        };

        match serialized {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => {
                debug!(key = %key, "No collection stored in Redis");
                Ok(Vec::new())
            }
        }
    }

    async fn write_collection(&self, name: &str, records: Vec<Record>) -> Result<()> {
        let key = self.collection_key(name);
        let serialized = serde_json::to_string(&records)?;
        let mut conn = self.connection_manager.clone();

        conn.set::<_, _, ()>(&key, serialized).await?;
        debug!(key = %key, records = records.len(), "Collection saved to Redis");
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
