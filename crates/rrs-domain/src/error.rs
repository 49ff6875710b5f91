//! Error handling types

use thiserror::Error;

use crate::constants::{EMBEDDING_DIMENSION, MATCH_COUNT_MAX, MATCH_COUNT_MIN, QUERY_MAX_CHARS};

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Restaurant Review Search
///
/// Input errors are detected locally before any network call and are
/// recoverable by correcting the input. Service errors carry the remote
/// message and are eligible for an explicit caller-triggered retry.
/// Configuration errors are fatal to the request path they affect.
#[derive(Error, Debug)]
pub enum Error {
    /// Search text was empty or blank after trimming
    #[error("search text cannot be empty")]
    EmptyQuery,

    /// Search text exceeded the maximum length
    #[error("search text is too long (maximum {max} characters)")]
    QueryTooLong {
        /// The maximum number of characters allowed
        max: usize,
    },

    /// Embedding vector had the wrong number of dimensions
    #[error("invalid embedding dimension: expected {expected}, got {actual}")]
    InvalidEmbeddingShape {
        /// The required dimensionality
        expected: usize,
        /// The dimensionality actually observed
        actual: usize,
    },

    /// Match count was outside the accepted range
    #[error("match count must be between {min} and {max}")]
    InvalidMatchCount {
        /// Lower bound of the accepted range
        min: usize,
        /// Upper bound of the accepted range
        max: usize,
    },

    /// Match threshold was outside [0, 1]
    #[error("match threshold must be between 0 and 1")]
    InvalidMatchThreshold,

    /// Embedding service operation error
    #[error("embedding service error: {message}")]
    Embedding {
        /// Description of the embedding service error
        message: String,
    },

    /// Search service operation error
    #[error("search service error: {message}")]
    Search {
        /// Description of the search service error
        message: String,
    },

    /// Upstream model API returned a non-success response
    #[error("upstream error ({status}): {body}")]
    Upstream {
        /// HTTP status returned by the upstream API
        status: u16,
        /// Upstream response body, echoed for diagnostics
        body: String,
    },

    /// Upstream response was missing or malformed
    #[error("invalid upstream response: {message}")]
    InvalidUpstreamResponse {
        /// Description of what was missing or malformed
        message: String,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// Network-related error
    #[error("network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal system error
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Input error creation methods
impl Error {
    /// Create a query-too-long error at the domain's maximum length
    pub fn query_too_long() -> Self {
        Self::QueryTooLong {
            max: QUERY_MAX_CHARS,
        }
    }

    /// Create an invalid-embedding-shape error against the fixed dimension
    pub fn invalid_embedding_shape(actual: usize) -> Self {
        Self::InvalidEmbeddingShape {
            expected: EMBEDDING_DIMENSION,
            actual,
        }
    }

    /// Create an invalid-match-count error over the server-side range
    pub fn invalid_match_count() -> Self {
        Self::InvalidMatchCount {
            min: MATCH_COUNT_MIN,
            max: MATCH_COUNT_MAX,
        }
    }
}

// Service error creation methods
impl Error {
    /// Create an embedding service error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create a search service error
    pub fn search<S: Into<String>>(message: S) -> Self {
        Self::Search {
            message: message.into(),
        }
    }

    /// Create an upstream error echoing the remote status and body
    pub fn upstream<S: Into<String>>(status: u16, body: S) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Create an invalid-upstream-response error
    pub fn invalid_upstream_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidUpstreamResponse {
            message: message.into(),
        }
    }
}

// Configuration, network and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether this error was produced by local input validation,
    /// before any network call could have been made
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyQuery
                | Self::QueryTooLong { .. }
                | Self::InvalidEmbeddingShape { .. }
                | Self::InvalidMatchCount { .. }
                | Self::InvalidMatchThreshold
        )
    }
}
