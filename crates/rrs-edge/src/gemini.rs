//! Gemini upstream client
//!
//! Calls Google's `embedContent` endpoint for a single whole text (no
//! chunking) and validates the returned vector's dimensionality before
//! handing it back.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use rrs_domain::error::{Error, Result};
use rrs_domain::validation::validate_embedding;

use crate::config::GeminiConfig;

/// JSON content type header value
const CONTENT_TYPE_JSON: &str = "application/json";

/// Client for the Gemini embedding API
///
/// The API key is optional at construction: its absence is a
/// configuration error surfaced per request (distinct from request
/// errors), since no local remediation is possible.
pub struct GeminiClient {
    api_key: Option<String>,
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Arguments
    /// * `api_key` - Google AI API key, if configured
    /// * `base_url` - Base URL of the Gemini API
    /// * `model` - Model name (e.g., "embedding-001")
    /// * `timeout` - Upstream request timeout
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: Option<String>,
        base_url: String,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: api_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            model,
            timeout,
            http_client,
        }
    }

    /// Build a client from the loaded configuration
    pub fn from_config(config: &GeminiConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.model.clone(),
            timeout,
            http_client,
        ))
    }

    /// Get the model name for API calls (remove prefix if present)
    pub fn api_model_name(&self) -> &str {
        self.model.strip_prefix("models/").unwrap_or(&self.model)
    }

    /// Whether an upstream API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate the embedding for one validated, trimmed text
    ///
    /// Requests a single embedding for the whole text. Every upstream
    /// anomaly maps to a distinct error: non-success status echoes the
    /// upstream status and body, a missing/malformed vector is an invalid
    /// upstream response, and a wrong dimensionality is a shape error.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config("GEMINI_API_KEY is not set"))?;

        let payload = serde_json::json!({
            "model": format!("models/{}", self.api_model_name()),
            "content": { "parts": [{ "text": text }] }
        });

        let url = format!(
            "{}/v1beta/models/{}:embedContent",
            self.base_url,
            self.api_model_name()
        );

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("x-goog-api-key", api_key)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::network_with_source("failed to reach embedding model API", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::upstream(status.as_u16(), body));
        }

        let data: serde_json::Value = response.json().await.map_err(|e| {
            Error::invalid_upstream_response(format!("embedding model returned non-JSON body: {e}"))
        })?;

        let vector = data["embedding"]["values"]
            .as_array()
            .ok_or_else(|| {
                Error::invalid_upstream_response("missing embedding values in model response")
            })?
            .iter()
            .map(|v| {
                v.as_f64().map(|f| f as f32).ok_or_else(|| {
                    Error::invalid_upstream_response("non-numeric embedding value in model response")
                })
            })
            .collect::<Result<Vec<f32>>>()?;

        validate_embedding(&vector)?;
        debug!(dimensions = vector.len(), "upstream embedding generated");

        Ok(vector)
    }
}
