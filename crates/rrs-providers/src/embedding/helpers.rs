//! Common helpers for HTTP-backed providers
//!
//! Shared constructor patterns used by the embedding and search providers
//! to normalize injected configuration.

/// Common constructor patterns used by providers
pub mod constructor {
    /// Validate and normalize API keys
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Validate and normalize base URLs, dropping a trailing slash
    pub fn validate_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }
}
