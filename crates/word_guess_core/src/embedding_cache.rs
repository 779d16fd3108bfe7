//! crates/word_guess_core/src/embedding_cache.rs
//!
//! Per-day memoization of guess embeddings.

use std::sync::Arc;

use crate::error::GameResult;
use crate::ports::{EmbeddingProvider, KeyValueStore};
use crate::store;

/// Memoizes the embedding of any guessed word for a given day, keyed by
/// `guess-{day}-{word}`, so the same word is never embedded twice for the
/// same day, across all users.
#[derive(Clone)]
pub struct GuessEmbeddingCache {
    store: Arc<dyn KeyValueStore>,
    provider: Arc<dyn EmbeddingProvider>,
}

impl GuessEmbeddingCache {
    /// Creates a new `GuessEmbeddingCache`.
    pub fn new(store: Arc<dyn KeyValueStore>, provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, provider }
    }

    /// Returns the embedding for `word` on `day`, calling the provider at
    /// most once. Embeddings are assumed time-invariant, so entries are
    /// permanent and never invalidated.
    pub async fn embedding(&self, day: &str, word: &str) -> GameResult<Vec<f64>> {
        let key = store::guess_embedding_key(day, word);
        if let Some(value) = self.store.get(&key).await? {
            return store::decode(&key, value);
        }

        let embedded = self.provider.embed(word).await?;
        self.store
            .put(&key, store::encode(&key, &embedded)?)
            .await?;
        Ok(embedded)
    }
}
