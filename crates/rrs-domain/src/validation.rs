//! Boundary validation
//!
//! Pure functions enforcing the input constraints shared by the clients,
//! the session and the edge service. No state, no I/O. Every caller
//! validates at its own boundary; independently deployed processes do not
//! trust each other's version skew.

use crate::constants::{EMBEDDING_DIMENSION, MATCH_COUNT_MAX, MATCH_COUNT_MIN, QUERY_MAX_CHARS};
use crate::error::{Error, Result};

/// Validate and normalize query text
///
/// Rejects text that is blank after trimming or longer than
/// [`QUERY_MAX_CHARS`] characters (not bytes; multibyte text is counted
/// per character). The length check runs on the raw input so that a
/// pathological pre-trim payload is rejected the same way at every
/// boundary. Returns the trimmed text.
pub fn validate_query_text(text: &str) -> Result<String> {
    // Counting stops one past the cap, so oversized input is not scanned
    // in full.
    if text.chars().take(QUERY_MAX_CHARS + 1).count() > QUERY_MAX_CHARS {
        return Err(Error::query_too_long());
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyQuery);
    }

    Ok(trimmed.to_string())
}

/// Validate an embedding vector's shape
///
/// Any length other than [`EMBEDDING_DIMENSION`] is rejected, regardless
/// of whether the vector was generated locally or received over the wire.
pub fn validate_embedding(vector: &[f32]) -> Result<()> {
    if vector.len() != EMBEDDING_DIMENSION {
        return Err(Error::invalid_embedding_shape(vector.len()));
    }
    Ok(())
}

/// Validate a match count against the server-side range [1, 100]
///
/// Out-of-range values are errors, never silently clamped; a narrower UI
/// range must not bypass this check.
pub fn validate_match_count(match_count: usize) -> Result<()> {
    if !(MATCH_COUNT_MIN..=MATCH_COUNT_MAX).contains(&match_count) {
        return Err(Error::invalid_match_count());
    }
    Ok(())
}

/// Validate a similarity threshold for the pure vector search variant
pub fn validate_match_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(Error::InvalidMatchThreshold);
    }
    Ok(())
}
