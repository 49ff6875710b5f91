//! Provider Constants
//!
//! Constants specific to provider implementations. Domain-level limits
//! (dimension, query length, match count range) live in `rrs-domain`.

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "request timed out after";

/// Path of the embedding edge function, relative to the backend base URL
pub const EDGE_FUNCTION_PATH: &str = "functions/v1/generate-embedding";

/// Path prefix of PostgREST RPC calls, relative to the backend base URL
pub const RPC_PATH_PREFIX: &str = "rest/v1/rpc";

/// RPC function implementing hybrid (lexical + vector) retrieval
pub const RPC_HYBRID_SEARCH: &str = "hybrid_search_restaurant_reviews";

/// RPC function implementing pure vector similarity retrieval
pub const RPC_VECTOR_SEARCH: &str = "search_restaurant_reviews";
