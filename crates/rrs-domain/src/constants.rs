//! Domain layer constants
//!
//! Boundary limits shared by the clients, the session, and the edge
//! service. The dimension is fixed by the embedding model; both sides of
//! the wire validate against it independently.

// ============================================================================
// EMBEDDING DOMAIN CONSTANTS
// ============================================================================

/// Dimensionality of every embedding vector in the system (Gemini embedding-001)
pub const EMBEDDING_DIMENSION: usize = 768;

/// Maximum query length in characters accepted anywhere in the pipeline
pub const QUERY_MAX_CHARS: usize = 10_000;

// ============================================================================
// SEARCH DOMAIN CONSTANTS
// ============================================================================

/// Minimum number of results a retrieval call may request
pub const MATCH_COUNT_MIN: usize = 1;

/// Maximum number of results a retrieval call may request (server-side range)
pub const MATCH_COUNT_MAX: usize = 100;

/// Maximum match count exposed by the UI layer (narrower than the server range)
pub const UI_MATCH_COUNT_MAX: usize = 50;

/// Default number of results when the caller does not specify one
pub const DEFAULT_MATCH_COUNT: usize = 10;
