//! Domain ports
//!
//! Trait contracts implemented outside the domain layer. The session
//! orchestrates through these ports and never depends on a concrete
//! provider.

pub mod providers;

pub use providers::{EmbeddingProvider, ReviewSearchProvider};
