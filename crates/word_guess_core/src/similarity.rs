//! crates/word_guess_core/src/similarity.rs
//!
//! Cosine-similarity scoring between embedding vectors.

/// Violations of the scoring input contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SimilarityError {
    /// The two embeddings have different lengths. Summing over the shorter
    /// prefix would silently distort the score, so this fails fast instead.
    #[error("Embedding lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// One of the embeddings has zero magnitude; the quotient would be NaN,
    /// which must never reach the ranking fold as an ordering value.
    #[error("Cannot score against a zero-magnitude embedding")]
    ZeroMagnitude,
}

/// Cosine similarity between two equal-length vectors: `dot(a,b) / (|a|·|b|)`,
/// in [-1, 1].
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let magnitude_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b = b.iter().map(|y| y * y).sum::<f64>().sqrt();
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Err(SimilarityError::ZeroMagnitude);
    }

    Ok(dot / (magnitude_a * magnitude_b))
}
