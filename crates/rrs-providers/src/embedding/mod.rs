//! Embedding Provider Implementations
//!
//! Converts query text into a fixed-dimension vector embedding.
//!
//! | Provider | Type | Use |
//! |----------|------|-----|
//! | `EdgeEmbeddingProvider` | HTTP | Production, via the embedding edge service |
//! | `NullEmbeddingProvider` | Deterministic | Unit tests and offline development |

pub mod edge;
pub mod helpers;
pub mod null;

pub use edge::EdgeEmbeddingProvider;
pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
