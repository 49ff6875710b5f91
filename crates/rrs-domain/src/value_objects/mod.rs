//! Domain value objects
//!
//! Immutable data carried across the pipeline: embeddings, search options,
//! retrieved review records, and the session state snapshot.

pub mod embedding;
pub mod review;
pub mod search;

pub use embedding::Embedding;
pub use review::ReviewResult;
pub use search::{SearchOptions, SearchSnapshot};
