//! crates/word_guess_core/src/domain.rs
//!
//! Defines the pure, core data structures for the game.
//! These structs are independent of any store or provider implementation;
//! the persisted ones carry their exact wire shape through serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Formats a point in time as the game's calendar-day key, `YYYY-MM-DD` in UTC.
pub fn date_stamp(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Canonical form of any guessed or generated word: trimmed and lower-cased.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The secret word for one calendar day together with its embedding.
///
/// Stored under the date-stamp key. Immutable once written; the store is the
/// sole source of truth. The stored field name is `embeddings` (plural).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordOfDay {
    pub word: String,
    pub embeddings: Vec<f64>,
}

/// One recorded guess: the normalized word and its raw cosine similarity to
/// the secret word, in [-1, 1]. Higher means closer, despite the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    pub word: String,
    pub distance: f64,
}

/// Tunable game rules: the fixed seed guess every tournament starts from and
/// the per-day attempt limit.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub initial_guess: String,
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_guess: "guess".to_string(),
            max_attempts: 20,
        }
    }
}

/// Which side of a head-to-head round won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// A word with its similarity as a whole percentage, `round(distance * 100)`.
/// The percentage is the only distance information ever exposed publicly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGuess {
    pub word: String,
    pub distance: i32,
}

/// One round of the public tournament view. Derived and ephemeral: never
/// persisted, recomputed on every read.
///
/// At most one `Pending` round exists, only as the last element, and only
/// while the game is neither won nor out of attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PublicRound {
    Complete {
        left: RankedGuess,
        right: RankedGuess,
        winner: Side,
    },
    Pending { word: String, distance: i32 },
}

/// Everything a player is allowed to see about their game for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicGame {
    pub rounds: Vec<PublicRound>,
    pub won: bool,
    pub attempts_left: i32,
}

/// Lifecycle of a single (user, day) game. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl PublicGame {
    /// Derives the lifecycle state from the view itself.
    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.attempts_left <= 0 {
            GameStatus::Lost
        } else if self
            .rounds
            .iter()
            .any(|round| matches!(round, PublicRound::Complete { .. }))
        {
            GameStatus::InProgress
        } else {
            GameStatus::NotStarted
        }
    }
}
