//! crates/word_guess_core/src/error.rs
//!
//! The primary error type for the game core.

use crate::ports::PortError;
use crate::similarity::SimilarityError;

/// Everything that can go wrong while reading or advancing a game.
///
/// The first three variants are user-visible rejections that leave game state
/// unchanged; the rest are fatal for the current request and propagate
/// unrecovered. Nothing here is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The submitted guess is shorter than the minimum after normalization.
    #[error("Please enter {min} or more characters")]
    GuessTooShort { min: usize },

    /// The ledger already contains this word for the day.
    #[error("You already guessed that word!")]
    DuplicateGuess { word: String },

    /// The per-day attempt limit has been reached.
    #[error("No attempts left!")]
    AttemptsExhausted,

    /// A stored value failed schema validation. Never silently repaired or
    /// coerced to a default.
    #[error("Stored value under key '{key}' is malformed: {reason}")]
    DataIntegrity { key: String, reason: String },

    /// Word generation produced no usable word after normalization.
    #[error("Word generation produced no usable word for {date_stamp}")]
    EmptyGeneration { date_stamp: String },

    /// A store or provider call failed.
    #[error(transparent)]
    Port(#[from] PortError),

    /// The embeddings being compared violated the scoring input contract.
    #[error(transparent)]
    Similarity(#[from] SimilarityError),
}

impl GameError {
    /// True for rejections the player should see as ordinary feedback
    /// ("too short", "already guessed", "no attempts left") rather than a
    /// failure of the request itself.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GameError::GuessTooShort { .. }
                | GameError::DuplicateGuess { .. }
                | GameError::AttemptsExhausted
        )
    }
}

/// A convenience type alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;
