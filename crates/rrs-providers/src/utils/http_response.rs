//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from the edge service
//! and the retrieval backend. These are shared utilities, not ports.

use reqwest::Response;
use rrs_domain::error::{Error, Result};

/// Utilities for processing HTTP responses
///
/// Both backends return structured `{ "error": ..., "details": ... }` (or
/// PostgREST's `{ "message": ... }`) bodies on failure; these helpers pull
/// the human-readable message out so callers surface the remote detail
/// rather than a bare status code.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    /// * `make_error` - Error constructor for this provider's failure class
    ///
    /// # Returns
    /// Parsed JSON value on success, or the provider's error carrying the
    /// remote message
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
        make_error: fn(String) -> Error,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let detail = Self::extract_error_message(&error_text);
            let code = status.as_u16();

            return Err(make_error(format!(
                "{provider_name} request failed ({code}): {detail}"
            )));
        }

        response.json().await.map_err(|e| {
            make_error(format!("{provider_name} response parse failed: {e}"))
        })
    }

    /// Pull a human-readable message out of a structured error body
    ///
    /// Recognizes the edge service's `{ error, details }` shape and
    /// PostgREST's `{ message }` shape; falls back to the raw body.
    pub fn extract_error_message(body: &str) -> String {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            for key in ["error", "message"] {
                if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                    return message.to_string();
                }
            }
        }
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_edge_error_shape() {
        let body = r#"{"error":"upstream down","details":"socket closed"}"#;
        assert_eq!(HttpResponseUtils::extract_error_message(body), "upstream down");
    }

    #[test]
    fn extracts_postgrest_message_shape() {
        let body = r#"{"message":"function does not exist","code":"42883"}"#;
        assert_eq!(
            HttpResponseUtils::extract_error_message(body),
            "function does not exist"
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(HttpResponseUtils::extract_error_message("gateway timeout"), "gateway timeout");
    }
}
