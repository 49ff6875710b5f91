//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings at the system's fixed
//! dimension. No external dependencies - always works offline.

use async_trait::async_trait;

use rrs_domain::constants::EMBEDDING_DIMENSION;
use rrs_domain::error::Result;
use rrs_domain::ports::providers::EmbeddingProvider;
use rrs_domain::validation::validate_query_text;
use rrs_domain::value_objects::Embedding;

/// Null embedding provider for testing
///
/// Returns fixed-size vectors filled with deterministic values based on
/// the input text hash. Useful for unit tests and development without
/// requiring an actual embedding service. Applies the same input
/// validation as the real provider so behavior under invalid input is
/// identical.
///
/// # Example
///
/// ```rust
/// use rrs_providers::embedding::NullEmbeddingProvider;
/// use rrs_providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 768);
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let trimmed = validate_query_text(text)?;

        // Deterministic test embedding based on text hash; wrapping keeps
        // long high-codepoint inputs from overflowing
        let hash = trimmed
            .chars()
            .fold(0_u32, |acc, c| acc.wrapping_add(c as u32));
        let base_value = (hash % 1000) as f32 / 1000.0;

        let vector = (0..EMBEDDING_DIMENSION)
            .map(|j| {
                let variation = (j as f32 * 0.01).sin();
                (base_value + variation * 0.1).clamp(0.0, 1.0)
            })
            .collect();

        Ok(Embedding::new(vector, "null-test"))
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
