//! crates/word_guess_core/src/store.rs
//!
//! Key construction and schema validation at the key-value store boundary.
//! Every value read back from the store is validated against its expected
//! shape here; a mismatch is a fatal data-integrity error, never repaired.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{GameError, GameResult};

/// Key for a cached guess embedding, shared by every user guessing the same
/// word on the same day.
pub fn guess_embedding_key(day: &str, word: &str) -> String {
    format!("guess-{day}-{word}")
}

/// Key for one user's guess sequence for one day.
pub fn ledger_key(user_id: &str, day: &str) -> String {
    format!("{user_id}-{day}")
}

pub(crate) fn decode<T: DeserializeOwned>(key: &str, value: Value) -> GameResult<T> {
    serde_json::from_value(value).map_err(|source| GameError::DataIntegrity {
        key: key.to_string(),
        reason: source.to_string(),
    })
}

pub(crate) fn encode<T: Serialize>(key: &str, value: &T) -> GameResult<Value> {
    serde_json::to_value(value).map_err(|source| GameError::DataIntegrity {
        key: key.to_string(),
        reason: source.to_string(),
    })
}
