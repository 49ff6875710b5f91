//! # Restaurant Review Search - Provider Implementations
//!
//! HTTP-backed implementations of the ports defined in `rrs-domain`.
//!
//! | Port | Implementations |
//! |------|-----------------|
//! | `EmbeddingProvider` | EdgeEmbeddingProvider, NullEmbeddingProvider |
//! | `ReviewSearchProvider` | PostgrestSearchProvider |
//!
//! Providers receive their `reqwest::Client` via constructor injection and
//! perform exactly one outbound call per operation; retrying is a caller
//! concern.

// Re-export rrs-domain types commonly used with providers
pub use rrs_domain::error::{Error, Result};
pub use rrs_domain::ports::providers::{EmbeddingProvider, ReviewSearchProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Review retrieval provider implementations
pub mod search;
