pub mod domain;
pub mod embedding_cache;
pub mod error;
pub mod game;
pub mod ledger;
pub mod ports;
pub mod ranking;
pub mod scorer;
pub mod similarity;
pub mod store;
pub mod word_of_day;

pub use domain::{
    date_stamp, normalize_word, GameConfig, GameStatus, Guess, PublicGame, PublicRound,
    RankedGuess, Side, WordOfDay,
};
pub use error::{GameError, GameResult};
pub use game::{Game, MIN_GUESS_CHARS};
pub use ports::{EmbeddingProvider, KeyValueStore, PortError, PortResult};
pub use similarity::{cosine_similarity, SimilarityError};
