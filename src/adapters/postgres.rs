// src/adapters/postgres.rs
use crate::adapters::memory::SnapshotIterator;
use crate::state::{KeyValue, StateError, StateIterator, WorldState};
use async_trait::async_trait;
use sqlx::Row;

/// Postgres-backed world state.
///
/// One row per key; range queries materialize the ordered result set before
/// iteration so the cursor outlives the connection checkout.
#[derive(Clone)]
pub struct PostgresWorldState {
    pool: sqlx::PgPool,
}

impl PostgresWorldState {
    pub fn from_pool(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Idempotent schema setup for standalone deployments.
    pub async fn init_schema(&self) -> Result<(), StateError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS world_state (
                key TEXT PRIMARY KEY,
                value BYTEA NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StateError::new(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl WorldState for PostgresWorldState {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        let row = sqlx::query("SELECT value FROM world_state WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StateError::new(e.to_string()))?;

        Ok(row.map(|r| r.get::<Vec<u8>, _>("value")))
    }

    async fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StateError> {
        sqlx::query(
            r#"
            INSERT INTO world_state (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| StateError::new(e.to_string()))?;

        Ok(())
    }

    async fn delete_state(&self, key: &str) -> Result<(), StateError> {
        sqlx::query("DELETE FROM world_state WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| StateError::new(e.to_string()))?;

        Ok(())
    }

    async fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIterator>, StateError> {
        let rows = sqlx::query(
            r#"
            SELECT key, value FROM world_state
            WHERE ($1 = '' OR key >= $1)
              AND ($2 = '' OR key < $2)
            ORDER BY key
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StateError::new(e.to_string()))?;

        let entries = rows
            .into_iter()
            .map(|row| KeyValue {
                key: row.get("key"),
                value: row.get("value"),
            })
            .collect();

        Ok(Box::new(SnapshotIterator::new(entries)))
    }
}
