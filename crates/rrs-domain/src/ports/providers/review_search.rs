use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Embedding, ReviewResult};

/// Review Retrieval Port
///
/// Contract for the backend that ranks candidate reviews. Ranking and
/// thresholding are entirely the backend's responsibility; results arrive
/// sorted most-relevant-first and implementations must not re-sort,
/// re-filter or deduplicate them, to avoid divergent semantics between
/// client and server.
#[async_trait]
pub trait ReviewSearchProvider: Send + Sync {
    /// Hybrid search: lexical match against `query` combined with vector
    /// similarity against `embedding`, in one ranked retrieval call
    ///
    /// Returns at most `match_count` records. An absent result payload
    /// normalizes to the empty vector, never an error.
    async fn hybrid_search(
        &self,
        query: &str,
        embedding: &Embedding,
        match_count: usize,
    ) -> Result<Vec<ReviewResult>>;

    /// Pure vector similarity search, the non-hybrid retrieval variant
    ///
    /// Records below `match_threshold` similarity are excluded by the
    /// backend.
    async fn vector_search(
        &self,
        embedding: &Embedding,
        match_threshold: f64,
        match_count: usize,
    ) -> Result<Vec<ReviewResult>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
