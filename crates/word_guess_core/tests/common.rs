//! Shared in-memory fakes for exercising the game against its ports.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use word_guess_core::ports::{EmbeddingProvider, KeyValueStore, PortError, PortResult};

/// A `KeyValueStore` over a mutex-guarded map, with test-side peeking.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn raw(&self, key: &str) -> Option<Value> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Seeds a value directly, bypassing the game (e.g. malformed data).
    pub fn seed(&self, key: &str, value: Value) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> PortResult<Option<Value>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> PortResult<()> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

/// An `EmbeddingProvider` with fixed per-word vectors and a scripted
/// generated word. Call counters make memoization observable.
pub struct FakeProvider {
    embeddings: HashMap<String, Vec<f64>>,
    generated: Option<String>,
    pub embed_calls: AtomicUsize,
    pub generate_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new(generated: Option<&str>, words: &[(&str, Vec<f64>)]) -> Self {
        Self {
            embeddings: words
                .iter()
                .map(|(word, vector)| (word.to_string(), vector.clone()))
                .collect(),
            generated: generated.map(str::to_string),
            embed_calls: AtomicUsize::new(0),
            generate_calls: AtomicUsize::new(0),
        }
    }

    pub fn embed_count(&self) -> usize {
        self.embed_calls.load(Ordering::SeqCst)
    }

    pub fn generate_count(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for FakeProvider {
    async fn embed(&self, word: &str) -> PortResult<Vec<f64>> {
        self.embed_calls.fetch_add(1, Ordering::SeqCst);
        self.embeddings
            .get(word)
            .cloned()
            .ok_or_else(|| PortError::Provider(format!("no scripted embedding for '{word}'")))
    }

    async fn generate_word(&self, _date_stamp: &str) -> PortResult<String> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.generated
            .clone()
            .ok_or_else(|| PortError::Provider("no scripted word".to_string()))
    }
}

/// A unit vector whose cosine similarity against `[1, 0]` is `cos`.
pub fn embedding_with_similarity(cos: f64) -> Vec<f64> {
    vec![cos, (1.0 - cos * cos).sqrt()]
}
