//! crates/word_guess_core/src/word_of_day.rs
//!
//! Resolution and caching of the day's secret word.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{normalize_word, WordOfDay};
use crate::error::{GameError, GameResult};
use crate::ports::{EmbeddingProvider, KeyValueStore};
use crate::store;

/// Resolves the secret word for a given day, backed by the key-value store.
///
/// Lookup order: previously persisted word, then the injected calendar of
/// pre-selected words, then on-demand generation through the provider. The
/// store is authoritative and entries are create-once; a resolved `WordOfDay`
/// is never mutated or deleted.
#[derive(Clone)]
pub struct WordOfDayCache {
    store: Arc<dyn KeyValueStore>,
    provider: Arc<dyn EmbeddingProvider>,
    calendar: HashMap<String, String>,
}

impl WordOfDayCache {
    /// Creates a new `WordOfDayCache`. `calendar` maps date stamps to
    /// pre-selected words and is consulted before falling back to generation.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        provider: Arc<dyn EmbeddingProvider>,
        calendar: HashMap<String, String>,
    ) -> Self {
        Self {
            store,
            provider,
            calendar,
        }
    }

    /// Returns the day's `WordOfDay`, creating and persisting it on first
    /// access for that day.
    ///
    /// Idempotent and safe to call concurrently. There is no transactional
    /// guard around the first resolution: racing callers may each generate,
    /// embed, and write, with the last write winning. Readers always observe
    /// some valid `WordOfDay` afterwards.
    pub async fn resolve(&self, day: &str) -> GameResult<WordOfDay> {
        if let Some(value) = self.store.get(day).await? {
            return store::decode(day, value);
        }

        if let Some(word) = self.calendar.get(day) {
            return self.embed_and_store(word.clone(), day).await;
        }

        let generated = self.provider.generate_word(day).await?;
        let word = normalize_word(&generated);
        if word.is_empty() {
            return Err(GameError::EmptyGeneration {
                date_stamp: day.to_string(),
            });
        }
        debug!(day, word = %word, "generated word of the day");
        self.embed_and_store(word, day).await
    }

    async fn embed_and_store(&self, word: String, day: &str) -> GameResult<WordOfDay> {
        let embeddings = self.provider.embed(&word).await?;
        let word_of_day = WordOfDay { word, embeddings };
        self.store
            .put(day, store::encode(day, &word_of_day)?)
            .await?;
        Ok(word_of_day)
    }
}
