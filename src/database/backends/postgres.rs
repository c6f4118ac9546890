//! PostgreSQL document store
//!
//! Each collection is one JSONB document in the `collections` table; writes
//! upsert the whole document in a single statement.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use crate::database::store::{Record, RecordStore};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
    prefix: String,
}

impl PostgresStore {
    pub fn new(pool: PgPool, prefix: &str) -> Self {
        Self {
            pool,
            prefix: prefix.to_string(),
        }
    }

    fn collection_key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

#[async_trait]
impl RecordStore for PostgresStore {
    async fn read_collection(&self, name: &str) -> Result<Vec<Record>> {
        let row = sqlx::query_as::<_, (Json<Vec<Record>>,)>(
            "SELECT records FROM collections WHERE name = $1"
        )
        .bind(self.collection_key(name))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(Json(records),)| records).unwrap_or_default())
    }

    async fn write_collection(&self, name: &str, records: Vec<Record>) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO collections (name, records, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (name) DO UPDATE
            SET records = EXCLUDED.records,
                updated_at = EXCLUDED.updated_at
            "#
        )
        .bind(self.collection_key(name))
        .bind(Json(records))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
