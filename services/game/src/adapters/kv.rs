//! services/game/src/adapters/kv.rs
//!
//! This module contains the key-value store adapter, the concrete
//! implementation of the `KeyValueStore` port from the `core` crate. It keeps
//! all game state in a single Postgres table using `sqlx`.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use word_guess_core::ports::{KeyValueStore, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A Postgres-backed adapter that implements the `KeyValueStore` port.
///
/// One row per key in `kv_store`; `put` is an unconditional upsert, so the
/// last writer wins, which is the consistency model the game core documents.
#[derive(Clone)]
pub struct PgKvStore {
    pool: PgPool,
}

impl PgKvStore {
    /// Creates a new `PgKvStore`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

//=========================================================================================
// `KeyValueStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl KeyValueStore for PgKvStore {
    async fn get(&self, key: &str) -> PortResult<Option<Value>> {
        sqlx::query_scalar::<_, Value>("SELECT value FROM kv_store WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| PortError::Store(e.to_string()))
    }

    async fn put(&self, key: &str, value: Value) -> PortResult<()> {
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| PortError::Store(e.to_string()))?;
        Ok(())
    }
}
