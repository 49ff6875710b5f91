use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::Embedding;

/// Embedding Generation Port
///
/// Contract for services that turn query text into a fixed-dimension
/// semantic embedding. Implementations validate their input before any
/// network call and validate the returned vector's shape before handing
/// it back, so a caller never observes a mis-sized embedding as success.
///
/// # Example
///
/// ```ignore
/// use rrs_domain::ports::providers::EmbeddingProvider;
///
/// let provider: Arc<dyn EmbeddingProvider> = build_provider();
/// let embedding = provider.embed("best seafood in portland").await?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate the embedding for a single query text
    ///
    /// Exactly one outbound call per invocation; no internal retries.
    /// Retry is a caller-level concern.
    async fn embed(&self, text: &str) -> Result<Embedding>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
