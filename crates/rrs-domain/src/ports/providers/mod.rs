//! Provider ports
//!
//! Contracts for the two external collaborators of the search pipeline:
//! the embedding generation service and the review retrieval backend.

pub mod embedding;
pub mod review_search;

pub use embedding::EmbeddingProvider;
pub use review_search::ReviewSearchProvider;
