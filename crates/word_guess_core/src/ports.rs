//! crates/word_guess_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the game's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like the
//! key-value store or the embedding model's API.

use async_trait::async_trait;
use serde_json::Value;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Key-value store error: {0}")]
    Store(String),
    #[error("Embedding provider error: {0}")]
    Provider(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The persistent key-value store all game state lives in.
///
/// Keys in use: the date stamp (`YYYY-MM-DD`) for the word of the day,
/// `guess-{day}-{word}` for cached guess embeddings, and `{userId}-{day}` for
/// a user's guess sequence. Puts are unconditional; when two writers race the
/// last write wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetches the JSON value stored under `key`, if any.
    async fn get(&self, key: &str) -> PortResult<Option<Value>>;

    /// Stores `value` under `key`, replacing any existing value.
    async fn put(&self, key: &str, value: Value) -> PortResult<()>;
}

/// The external embedding/generation model, consumed as an opaque capability.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Returns the fixed-length embedding vector for `word`.
    /// Fails if the provider produces no vector.
    async fn embed(&self, word: &str) -> PortResult<Vec<f64>>;

    /// Produces a single common, non-proper-noun word deterministically
    /// associated with the given date stamp. The caller normalizes the result
    /// and rejects empty output.
    async fn generate_word(&self, date_stamp: &str) -> PortResult<String>;
}
