//! Review Retrieval Provider Implementations
//!
//! Implements the `ReviewSearchProvider` port against the retrieval
//! backend's RPC interface.

pub mod postgrest;

pub use postgrest::PostgrestSearchProvider;
