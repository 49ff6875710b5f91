//! Semantic Embedding Value Object
//!
//! Vector representation of query text that captures semantic meaning.
//! Embeddings are produced by the edge service per query, consumed once by
//! the hybrid search call, and never cached or reused across queries.

use serde::{Deserialize, Serialize};

use crate::constants::EMBEDDING_DIMENSION;

/// Value Object: Semantic Text Embedding
///
/// ## Business Rules
///
/// - The vector has exactly [`EMBEDDING_DIMENSION`] elements at every
///   boundary, whether generated locally or received over the wire
/// - Model name identifies the embedding generation method
///
/// ## Example
///
/// ```rust
/// use rrs_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.0; 768], "embedding-001");
/// assert_eq!(embedding.dimensions, 768);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding from a vector, recording its dimensionality
    pub fn new<S: Into<String>>(vector: Vec<f32>, model: S) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Whether this embedding has the dimensionality the system requires
    pub fn has_expected_dimension(&self) -> bool {
        self.vector.len() == EMBEDDING_DIMENSION
    }
}
