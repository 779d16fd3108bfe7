//! crates/word_guess_core/src/scorer.rs
//!
//! Scores a guess against the day's secret word.

use tracing::debug;

use crate::embedding_cache::GuessEmbeddingCache;
use crate::error::GameResult;
use crate::similarity::cosine_similarity;
use crate::word_of_day::WordOfDayCache;

/// The guess-scoring pipeline: resolves both embeddings through their caches
/// and reduces them to a single cosine-similarity score.
#[derive(Clone)]
pub struct GuessScorer {
    word_of_day: WordOfDayCache,
    embeddings: GuessEmbeddingCache,
}

impl GuessScorer {
    /// Creates a new `GuessScorer` over the two caches.
    pub fn new(word_of_day: WordOfDayCache, embeddings: GuessEmbeddingCache) -> Self {
        Self {
            word_of_day,
            embeddings,
        }
    }

    /// Raw similarity between `guess` and the day's secret word, in [-1, 1].
    pub async fn distance(&self, day: &str, guess: &str) -> GameResult<f64> {
        let answer = self.word_of_day.resolve(day).await?;
        let guess_embedding = self.embeddings.embedding(day, guess).await?;

        debug!(day, answer = %answer.word, guess, "scoring guess");
        Ok(cosine_similarity(&answer.embeddings, &guess_embedding)?)
    }
}
