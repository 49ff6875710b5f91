//! Edge Embedding Provider
//!
//! Implements the `EmbeddingProvider` port against the embedding edge
//! service (`POST /generate-embedding`), which fronts the external
//! embedding model.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use rrs_domain::constants::EMBEDDING_DIMENSION;
use rrs_domain::error::{Error, Result};
use rrs_domain::ports::providers::EmbeddingProvider;
use rrs_domain::validation::{validate_embedding, validate_query_text};
use rrs_domain::value_objects::Embedding;

use crate::constants::{CONTENT_TYPE_JSON, EDGE_FUNCTION_PATH, ERROR_MSG_REQUEST_TIMEOUT};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// Model label attached to embeddings produced through the edge service
const EDGE_EMBEDDING_MODEL: &str = "embedding-001";

/// Edge embedding provider
///
/// Validates the query text locally before dispatch (no network call for
/// invalid input), invokes the edge function once, and re-validates the
/// returned vector's shape. The edge service is expected to have validated
/// the dimension itself, but the two processes are independently
/// deployable and must not trust each other's version skew.
///
/// ## Example
///
/// ```rust,no_run
/// use rrs_providers::embedding::EdgeEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = EdgeEmbeddingProvider::new(
///         "https://project.supabase.co".to_string(),
///         "anon-key".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct EdgeEmbeddingProvider {
    base_url: String,
    anon_key: String,
    timeout: Duration,
    http_client: Client,
}

impl EdgeEmbeddingProvider {
    /// Create a new edge embedding provider
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

    /// Fetch the raw embedding response for a validated query text
    async fn fetch_embedding(&self, text: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({ "text": text });

        let url = format!("{}/{}", self.base_url, EDGE_FUNCTION_PATH);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::embedding(format!("{} {:?}", ERROR_MSG_REQUEST_TIMEOUT, self.timeout))
                } else {
                    Error::embedding(format!("HTTP request failed: {e}"))
                }
            })?;

        HttpResponseUtils::check_and_parse(response, "Edge function", Error::embedding).await
    }

    /// Parse and shape-check the embedding from the response payload
    fn parse_embedding(&self, response_data: &serde_json::Value) -> Result<Embedding> {
        let vector = response_data["embedding"]
            .as_array()
            .ok_or_else(|| {
                Error::embedding("invalid embedding response format from server".to_string())
            })?
            .iter()
            .map(|v| {
                v.as_f64().map(|f| f as f32).ok_or_else(|| {
                    Error::embedding("invalid embedding response format from server".to_string())
                })
            })
            .collect::<Result<Vec<f32>>>()?;

        validate_embedding(&vector)?;

        Ok(Embedding::new(vector, EDGE_EMBEDDING_MODEL))
    }
}

#[async_trait]
impl EmbeddingProvider for EdgeEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        // Fails fast on blank or oversized text, before any network call
        let trimmed = validate_query_text(text)?;

        let response_data = self.fetch_embedding(&trimmed).await?;
        self.parse_embedding(&response_data)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION
    }

    fn provider_name(&self) -> &str {
        "edge"
    }
}
