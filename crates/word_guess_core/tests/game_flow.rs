//! End-to-end coverage of the game over in-memory ports: word-of-day
//! resolution, embedding memoization, the ledger rules, and the public
//! tournament narrative.

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use common::{embedding_with_similarity, FakeProvider, MemoryStore};
use serde_json::json;
use word_guess_core::domain::{GameConfig, GameStatus, PublicRound, Side};
use word_guess_core::embedding_cache::GuessEmbeddingCache;
use word_guess_core::error::GameError;
use word_guess_core::game::Game;
use word_guess_core::store::{guess_embedding_key, ledger_key};
use word_guess_core::word_of_day::WordOfDayCache;

const DAY: &str = "2025-06-07";
const USER: &str = "01JX3Y7C9QD9T6E0S1V4N8RZKM";

/// The standard fixture: secret word "ocean" along the first axis, guesses
/// scripted to hit the distances used throughout the scenarios.
fn scripted_provider() -> FakeProvider {
    FakeProvider::new(
        Some("ocean"),
        &[
            ("ocean", embedding_with_similarity(1.0)),
            ("guess", embedding_with_similarity(0.10)),
            ("water", embedding_with_similarity(0.45)),
            ("sand", embedding_with_similarity(0.30)),
            ("harbor", embedding_with_similarity(0.60)),
        ],
    )
}

fn game_with(
    store: Arc<MemoryStore>,
    provider: Arc<FakeProvider>,
    calendar: HashMap<String, String>,
    config: GameConfig,
) -> Game {
    Game::new(store, provider, calendar, config)
}

fn default_game(store: Arc<MemoryStore>, provider: Arc<FakeProvider>) -> Game {
    game_with(store, provider, HashMap::new(), GameConfig::default())
}

//=========================================================================================
// Word-of-day resolution
//=========================================================================================

#[tokio::test]
async fn a_stored_word_is_returned_without_touching_the_provider() {
    let store = Arc::new(MemoryStore::default());
    store.seed(DAY, json!({ "word": "ocean", "embeddings": [1.0, 0.0] }));
    let provider = Arc::new(scripted_provider());
    let cache = WordOfDayCache::new(store, provider.clone(), HashMap::new());

    let word_of_day = cache.resolve(DAY).await.unwrap();

    assert_eq!(word_of_day.word, "ocean");
    assert_eq!(provider.generate_count(), 0);
    assert_eq!(provider.embed_count(), 0);
}

#[tokio::test]
async fn a_calendar_entry_is_embedded_and_persisted_before_generation_is_tried() {
    let store = Arc::new(MemoryStore::default());
    let provider = Arc::new(scripted_provider());
    let calendar = HashMap::from([(DAY.to_string(), "harbor".to_string())]);
    let cache = WordOfDayCache::new(store.clone(), provider.clone(), calendar);

    let word_of_day = cache.resolve(DAY).await.unwrap();

    assert_eq!(word_of_day.word, "harbor");
    assert_eq!(provider.generate_count(), 0);
    assert!(store.contains(DAY));
}

#[tokio::test]
async fn a_generated_word_is_normalized_and_resolution_is_idempotent() {
    let store = Arc::new(MemoryStore::default());
    let provider = Arc::new(FakeProvider::new(
        Some("  Ocean\n"),
        &[("ocean", embedding_with_similarity(1.0))],
    ));
    let cache = WordOfDayCache::new(store, provider.clone(), HashMap::new());

    let first = cache.resolve(DAY).await.unwrap();
    let second = cache.resolve(DAY).await.unwrap();

    assert_eq!(first.word, "ocean");
    assert_eq!(second, first);
    // The second resolve must come from the store.
    assert_eq!(provider.generate_count(), 1);
    assert_eq!(provider.embed_count(), 1);
}

#[tokio::test]
async fn empty_generation_output_is_an_error() {
    let store = Arc::new(MemoryStore::default());
    let provider = Arc::new(FakeProvider::new(Some("   \n"), &[]));
    let cache = WordOfDayCache::new(store, provider, HashMap::new());

    let err = cache.resolve(DAY).await.unwrap_err();

    assert!(matches!(err, GameError::EmptyGeneration { .. }));
    assert!(!err.is_rejection());
}

#[tokio::test]
async fn a_malformed_stored_word_is_a_data_integrity_error() {
    let store = Arc::new(MemoryStore::default());
    store.seed(DAY, json!({ "word": 42 }));
    let provider = Arc::new(scripted_provider());
    let cache = WordOfDayCache::new(store, provider, HashMap::new());

    let err = cache.resolve(DAY).await.unwrap_err();

    assert!(matches!(err, GameError::DataIntegrity { ref key, .. } if key == DAY));
}

//=========================================================================================
// Guess-embedding cache
//=========================================================================================

#[tokio::test]
async fn guess_embeddings_are_embedded_at_most_once_per_day() {
    let store = Arc::new(MemoryStore::default());
    let provider = Arc::new(scripted_provider());
    let cache = GuessEmbeddingCache::new(store.clone(), provider.clone());

    let first = cache.embedding(DAY, "water").await.unwrap();
    let second = cache.embedding(DAY, "water").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.embed_count(), 1);
    // The cache value is a bare array.
    let stored = store.raw(&guess_embedding_key(DAY, "water")).unwrap();
    assert!(stored.is_array());
}

//=========================================================================================
// Ledger rules
//=========================================================================================

#[tokio::test]
async fn the_first_ledger_read_persists_an_empty_sequence() {
    let store = Arc::new(MemoryStore::default());
    store.seed(DAY, json!({ "word": "ocean", "embeddings": [1.0, 0.0] }));
    let provider = Arc::new(scripted_provider());
    let game = default_game(store.clone(), provider);

    let key = ledger_key(USER, DAY);
    assert!(!store.contains(&key));

    game.view(USER, DAY).await.unwrap();

    assert_eq!(store.raw(&key), Some(json!([])));
}

#[tokio::test]
async fn duplicate_guesses_are_rejected_without_changing_the_ledger() {
    let store = Arc::new(MemoryStore::default());
    let provider = Arc::new(scripted_provider());
    let game = default_game(store.clone(), provider);

    game.submit(USER, DAY, "water").await.unwrap();
    let err = game.submit(USER, DAY, "  WATER ").await.unwrap_err();

    assert!(matches!(err, GameError::DuplicateGuess { ref word } if word == "water"));
    assert!(err.is_rejection());
    let stored = store.raw(&ledger_key(USER, DAY)).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn appends_beyond_the_attempt_limit_are_rejected() {
    let store = Arc::new(MemoryStore::default());
    let provider = Arc::new(scripted_provider());
    let config = GameConfig {
        max_attempts: 3,
        ..GameConfig::default()
    };
    let game = game_with(store.clone(), provider, HashMap::new(), config);

    for word in ["water", "sand", "harbor"] {
        game.submit(USER, DAY, word).await.unwrap();
    }
    let err = game.submit(USER, DAY, "guess").await.unwrap_err();

    assert!(matches!(err, GameError::AttemptsExhausted));
    assert!(err.is_rejection());
    let stored = store.raw(&ledger_key(USER, DAY)).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn short_guesses_are_rejected_before_any_provider_call() {
    let store = Arc::new(MemoryStore::default());
    let provider = Arc::new(scripted_provider());
    let game = default_game(store.clone(), provider.clone());

    let err = game.submit(USER, DAY, "  ab ").await.unwrap_err();

    assert!(matches!(err, GameError::GuessTooShort { min: 3 }));
    assert_eq!(provider.embed_count(), 0);
    assert!(!store.contains(&ledger_key(USER, DAY)));
}

#[tokio::test]
async fn provider_failures_propagate_and_record_nothing() {
    let store = Arc::new(MemoryStore::default());
    store.seed(DAY, json!({ "word": "ocean", "embeddings": [1.0, 0.0] }));
    let provider = Arc::new(scripted_provider());
    let game = default_game(store.clone(), provider);

    let err = game.submit(USER, DAY, "unscripted").await.unwrap_err();

    assert!(matches!(err, GameError::Port(_)));
    assert!(!err.is_rejection());
    assert_eq!(store.raw(&ledger_key(USER, DAY)), Some(json!([])));
}

//=========================================================================================
// The public tournament narrative
//=========================================================================================

#[tokio::test]
async fn a_full_game_tells_the_tournament_story() {
    let store = Arc::new(MemoryStore::default());
    let provider = Arc::new(scripted_provider());
    let game = default_game(store, provider);

    // Before any guess: one pending round for the seed.
    let view = game.view(USER, DAY).await.unwrap();
    assert_eq!(view.status(), GameStatus::NotStarted);
    assert_eq!(
        view.rounds,
        vec![PublicRound::Pending {
            word: "guess".to_string(),
            distance: 10,
        }]
    );

    // "water" beats the seed and becomes the champion.
    game.submit(USER, DAY, "water").await.unwrap();
    let view = game.view(USER, DAY).await.unwrap();
    assert_eq!(view.attempts_left, 19);
    assert_eq!(view.rounds.len(), 2);
    assert!(matches!(
        view.rounds[0],
        PublicRound::Complete { winner: Side::Right, .. }
    ));
    assert_eq!(
        view.rounds[1],
        PublicRound::Pending {
            word: "water".to_string(),
            distance: 45,
        }
    );

    // "sand" loses; the champion stands.
    game.submit(USER, DAY, "sand").await.unwrap();
    let view = game.view(USER, DAY).await.unwrap();
    assert!(matches!(
        view.rounds[1],
        PublicRound::Complete { winner: Side::Left, .. }
    ));
    assert_eq!(
        view.rounds[2],
        PublicRound::Pending {
            word: "water".to_string(),
            distance: 45,
        }
    );

    // The exact word wins the game; no pending round remains.
    game.submit(USER, DAY, "ocean").await.unwrap();
    let view = game.view(USER, DAY).await.unwrap();
    assert_eq!(view.status(), GameStatus::Won);
    assert!(view.won);
    assert_eq!(view.attempts_left, 17);
    match &view.rounds[2] {
        PublicRound::Complete { right, winner, .. } => {
            assert_eq!(right.word, "ocean");
            assert_eq!(right.distance, 100);
            assert_eq!(*winner, Side::Right);
        }
        other => panic!("expected the winning round, got {other:?}"),
    }
    assert!(!view
        .rounds
        .iter()
        .any(|round| matches!(round, PublicRound::Pending { .. })));
}

#[tokio::test]
async fn resubmitting_the_winning_word_is_an_ordinary_duplicate() {
    let store = Arc::new(MemoryStore::default());
    let provider = Arc::new(scripted_provider());
    let game = default_game(store, provider);

    game.submit(USER, DAY, "ocean").await.unwrap();
    let err = game.submit(USER, DAY, "ocean").await.unwrap_err();

    assert!(matches!(err, GameError::DuplicateGuess { .. }));
}

#[tokio::test]
async fn losing_at_the_limit_rejects_the_next_guess_as_exhausted() {
    let store = Arc::new(MemoryStore::default());
    let provider = Arc::new(scripted_provider());
    let config = GameConfig {
        max_attempts: 2,
        ..GameConfig::default()
    };
    let game = game_with(store, provider, HashMap::new(), config);

    game.submit(USER, DAY, "water").await.unwrap();
    game.submit(USER, DAY, "sand").await.unwrap();

    let view = game.view(USER, DAY).await.unwrap();
    assert_eq!(view.status(), GameStatus::Lost);
    assert!(!view.won);
    assert_eq!(view.attempts_left, 0);
    assert!(!view
        .rounds
        .iter()
        .any(|round| matches!(round, PublicRound::Pending { .. })));

    let err = game.submit(USER, DAY, "harbor").await.unwrap_err();
    assert!(matches!(err, GameError::AttemptsExhausted));
}
