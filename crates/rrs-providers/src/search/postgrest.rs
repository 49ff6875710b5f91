//! PostgREST Search Provider
//!
//! Implements the `ReviewSearchProvider` port against the retrieval
//! backend's PostgREST RPC interface. The backend owns ranking: hybrid
//! retrieval combines lexical matching and vector similarity server-side
//! and returns records already sorted most-relevant-first.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use rrs_domain::error::{Error, Result};
use rrs_domain::ports::providers::ReviewSearchProvider;
use rrs_domain::validation::{
    validate_embedding, validate_match_count, validate_match_threshold, validate_query_text,
};
use rrs_domain::value_objects::{Embedding, ReviewResult};

use crate::constants::{
    CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT, RPC_HYBRID_SEARCH, RPC_PATH_PREFIX,
    RPC_VECTOR_SEARCH,
};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// PostgREST search provider
///
/// Validates all arguments locally before dispatch (no network call on
/// violation), invokes one RPC per search, and normalizes an absent
/// result payload to the empty list. Never re-sorts, re-filters or
/// deduplicates what the backend returns.
///
/// ## Example
///
/// ```rust,no_run
/// use rrs_providers::search::PostgrestSearchProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = PostgrestSearchProvider::new(
///         "https://project.supabase.co".to_string(),
///         "anon-key".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct PostgrestSearchProvider {
    base_url: String,
    anon_key: String,
    timeout: Duration,
    http_client: Client,
}

impl PostgrestSearchProvider {
    /// Create a new PostgREST search provider
    ///
    /// # Arguments
    /// * `base_url` - Backend base URL (e.g., "https://project.supabase.co")
    /// * `anon_key` - Backend anonymous access key
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: String, anon_key: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url: constructor::validate_base_url(&base_url),
            anon_key: constructor::validate_api_key(&anon_key),
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invoke one RPC function with a JSON argument payload
    async fn call_rpc(
        &self,
        function: &str,
        args: serde_json::Value,
    ) -> Result<Vec<ReviewResult>> {
        let url = format!("{}/{}/{}", self.base_url, RPC_PATH_PREFIX, function);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .timeout(self.timeout)
            .json(&args)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::search(format!("{} {:?}", ERROR_MSG_REQUEST_TIMEOUT, self.timeout))
                } else {
                    Error::search(format!("HTTP request failed: {e}"))
                }
            })?;

        let data = HttpResponseUtils::check_and_parse(response, function, Error::search).await?;

        // The backend returns a JSON array; an explicit null or missing
        // payload normalizes to no results, never an error.
        if data.is_null() {
            return Ok(Vec::new());
        }

        let results: Vec<ReviewResult> = serde_json::from_value(data)
            .map_err(|e| Error::search(format!("{function} returned malformed records: {e}")))?;

        debug!(function, count = results.len(), "retrieval call resolved");
        Ok(results)
    }
}

#[async_trait]
impl ReviewSearchProvider for PostgrestSearchProvider {
    async fn hybrid_search(
        &self,
        query: &str,
        embedding: &Embedding,
        match_count: usize,
    ) -> Result<Vec<ReviewResult>> {
        // All violations fail fast, before any network call
        let query = validate_query_text(query)?;
        validate_embedding(&embedding.vector)?;
        validate_match_count(match_count)?;

        let args = serde_json::json!({
            "search_query": query,
            "query_embedding": embedding.vector,
            "match_count": match_count,
        });

        self.call_rpc(RPC_HYBRID_SEARCH, args).await
    }

    async fn vector_search(
        &self,
        embedding: &Embedding,
        match_threshold: f64,
        match_count: usize,
    ) -> Result<Vec<ReviewResult>> {
        validate_embedding(&embedding.vector)?;
        validate_match_threshold(match_threshold)?;
        validate_match_count(match_count)?;

        let args = serde_json::json!({
            "query_embedding": embedding.vector,
            "match_threshold": match_threshold,
            "match_count": match_count,
        });

        self.call_rpc(RPC_VECTOR_SEARCH, args).await
    }

    fn provider_name(&self) -> &str {
        "postgrest"
    }
}
