//! Request handlers
//!
//! The `/generate-embedding` contract:
//!
//! | Status | Body | Condition |
//! |--------|------|-----------|
//! | 200 | `{ "embedding": [768 floats] }` | Success |
//! | 400 | `{ "error", "details" }` | Missing/blank/oversized text |
//! | 500 | `{ "error", "details" }` | Upstream credential not configured |
//! | 502 | `{ "error", "details" }` | Upstream failure, malformed response, or dimension mismatch |
//!
//! Callers must check the status; body presence alone does not mean
//! success.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, catch, options, post};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use rrs_domain::error::Error;
use rrs_domain::validation::validate_query_text;

use crate::EdgeState;

/// Request body for embedding generation
#[derive(Debug, Deserialize)]
pub struct EmbeddingRequest {
    /// The text to embed; validated before any upstream call
    pub text: Option<String>,
}

/// Successful response body
#[derive(Debug, Serialize)]
pub struct EmbeddingResponse {
    /// The generated embedding vector
    pub embedding: Vec<f32>,
}

/// Structured failure body returned on every non-success path
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
    /// Diagnostic detail, including upstream context where available
    pub details: String,
}

/// Either response shape, serialized untagged
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EmbeddingHandlerResponse {
    /// The embedding was generated
    Success(EmbeddingResponse),
    /// A validation, configuration, or upstream failure
    Failure(ErrorBody),
}

/// Map an error to the contract's status code
fn status_for(error: &Error) -> Status {
    match error {
        Error::EmptyQuery | Error::QueryTooLong { .. } => Status::BadRequest,
        Error::Config { .. } => Status::InternalServerError,
        Error::Upstream { .. }
        | Error::InvalidUpstreamResponse { .. }
        | Error::InvalidEmbeddingShape { .. }
        | Error::Network { .. } => Status::BadGateway,
        _ => Status::InternalServerError,
    }
}

fn failure(error: &Error) -> (Status, Json<EmbeddingHandlerResponse>) {
    let status = status_for(error);
    warn!(%status, %error, "embedding request failed");
    (
        status,
        Json(EmbeddingHandlerResponse::Failure(ErrorBody {
            error: error.to_string(),
            details: format!("{error:?}"),
        })),
    )
}

/// Handle embedding generation
#[post("/generate-embedding", format = "json", data = "<request>")]
pub async fn generate_embedding(
    state: &State<EdgeState>,
    request: Json<EmbeddingRequest>,
) -> (Status, Json<EmbeddingHandlerResponse>) {
    let text = match request.text.as_deref() {
        Some(text) => text,
        None => return failure(&Error::EmptyQuery),
    };

    // Pre-trim length check plus blank rejection, before the upstream call
    let trimmed = match validate_query_text(text) {
        Ok(trimmed) => trimmed,
        Err(e) => return failure(&e),
    };

    match state.gemini.embed(&trimmed).await {
        Ok(embedding) => {
            info!(chars = trimmed.len(), dimensions = embedding.len(), "embedding generated");
            (
                Status::Ok,
                Json(EmbeddingHandlerResponse::Success(EmbeddingResponse {
                    embedding,
                })),
            )
        }
        Err(e) => failure(&e),
    }
}

/// Handle cross-origin preflight requests
///
/// The CORS fairing attaches the permissive headers; the body mirrors the
/// deployed function's handshake.
#[options("/generate-embedding")]
pub fn preflight() -> &'static str {
    "ok"
}

/// Malformed request body or parameters
#[catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "invalid request".to_string(),
        details: "request body must be JSON with a \"text\" field".to_string(),
    })
}

/// Unknown route
#[catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "not found".to_string(),
        details: "the only endpoint is POST /generate-embedding".to_string(),
    })
}

/// Unhandled server error
#[catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "internal server error".to_string(),
        details: "an unexpected error occurred".to_string(),
    })
}
