//! crates/word_guess_core/src/ledger.rs
//!
//! The per-user, per-day guess ledger.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::Guess;
use crate::error::{GameError, GameResult};
use crate::ports::KeyValueStore;
use crate::scorer::GuessScorer;
use crate::store;

/// Persists the ordered sequence of a user's guesses for a day under
/// `{userId}-{day}`, and enforces the duplicate and attempt-limit rules on
/// append.
#[derive(Clone)]
pub struct GuessLedger {
    store: Arc<dyn KeyValueStore>,
    scorer: GuessScorer,
    max_attempts: usize,
}

impl GuessLedger {
    /// Creates a new `GuessLedger`.
    pub fn new(store: Arc<dyn KeyValueStore>, scorer: GuessScorer, max_attempts: usize) -> Self {
        Self {
            store,
            scorer,
            max_attempts,
        }
    }

    /// Loads the guess sequence for `(user, day)`.
    ///
    /// First access persists an empty sequence rather than returning a
    /// transient one, so subsequent existence checks against the store are
    /// stable. Stored data is schema-validated on every read.
    pub async fn get(&self, user_id: &str, day: &str) -> GameResult<Vec<Guess>> {
        let key = store::ledger_key(user_id, day);
        match self.store.get(&key).await? {
            Some(value) => store::decode(&key, value),
            None => {
                self.store.put(&key, Value::Array(Vec::new())).await?;
                Ok(Vec::new())
            }
        }
    }

    /// Scores `word` (already normalized) and appends it to the sequence,
    /// rewriting the stored value wholesale.
    ///
    /// Enforced in order, before any provider call is made: a word already in
    /// the sequence is rejected as a duplicate, then a full sequence is
    /// rejected as exhausted. A won game gets no special treatment; further
    /// submissions run into these same two checks only.
    ///
    /// The read-score-write sequence holds no lock and uses no conditional
    /// write: concurrent submissions for the same key can race, and a
    /// last-write-wins persist may drop one of them.
    pub async fn append(&self, user_id: &str, day: &str, word: &str) -> GameResult<Guess> {
        let key = store::ledger_key(user_id, day);
        let mut guesses = self.get(user_id, day).await?;

        if guesses.iter().any(|guess| guess.word == word) {
            return Err(GameError::DuplicateGuess {
                word: word.to_string(),
            });
        }
        if guesses.len() >= self.max_attempts {
            return Err(GameError::AttemptsExhausted);
        }

        let distance = self.scorer.distance(day, word).await?;
        let guess = Guess {
            word: word.to_string(),
            distance,
        };
        guesses.push(guess.clone());
        self.store
            .put(&key, store::encode(&key, &guesses)?)
            .await?;
        Ok(guess)
    }
}
