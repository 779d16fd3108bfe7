//! crates/word_guess_core/src/game.rs
//!
//! Top-level orchestration of a day's game for one player.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{normalize_word, GameConfig, Guess, PublicGame};
use crate::embedding_cache::GuessEmbeddingCache;
use crate::error::{GameError, GameResult};
use crate::ledger::GuessLedger;
use crate::ports::{EmbeddingProvider, KeyValueStore};
use crate::ranking;
use crate::scorer::GuessScorer;
use crate::word_of_day::WordOfDayCache;

/// Minimum guess length, counted after normalization.
pub const MIN_GUESS_CHARS: usize = 3;

/// The assembled game: word-of-day resolution, guess scoring, the ledger,
/// and the public tournament view, wired over a store and a provider.
///
/// Operations are independent across distinct (user, day) keys. The caller
/// supplies an opaque, stable user id; session management lives elsewhere.
#[derive(Clone)]
pub struct Game {
    word_of_day: WordOfDayCache,
    scorer: GuessScorer,
    ledger: GuessLedger,
    config: GameConfig,
}

impl Game {
    /// Wires the full scoring pipeline over the given store and provider.
    /// `calendar` maps date stamps to pre-selected secret words.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        provider: Arc<dyn EmbeddingProvider>,
        calendar: HashMap<String, String>,
        config: GameConfig,
    ) -> Self {
        let word_of_day = WordOfDayCache::new(store.clone(), provider.clone(), calendar);
        let embeddings = GuessEmbeddingCache::new(store.clone(), provider);
        let scorer = GuessScorer::new(word_of_day.clone(), embeddings);
        let ledger = GuessLedger::new(store, scorer.clone(), config.max_attempts);
        Self {
            word_of_day,
            scorer,
            ledger,
            config,
        }
    }

    /// The player's current public view for `day`: the day's secret resolved,
    /// the ledger loaded, the seed guess scored, and everything folded
    /// through the tournament.
    pub async fn view(&self, user_id: &str, day: &str) -> GameResult<PublicGame> {
        let word_of_day = self.word_of_day.resolve(day).await?;
        let guesses = self.ledger.get(user_id, day).await?;
        let seed = Guess {
            word: self.config.initial_guess.clone(),
            distance: self.scorer.distance(day, &self.config.initial_guess).await?,
        };
        Ok(ranking::public_view(
            &guesses,
            &word_of_day,
            &seed,
            self.config.max_attempts,
        ))
    }

    /// Validates, scores, and records a submitted guess, returning the scored
    /// entry. Rejections (`GuessTooShort`, `DuplicateGuess`,
    /// `AttemptsExhausted`) leave the ledger untouched.
    pub async fn submit(&self, user_id: &str, day: &str, raw_guess: &str) -> GameResult<Guess> {
        let word = normalize_word(raw_guess);
        if word.chars().count() < MIN_GUESS_CHARS {
            return Err(GameError::GuessTooShort {
                min: MIN_GUESS_CHARS,
            });
        }
        self.ledger.append(user_id, day, &word).await
    }
}
