//! Review Result Value Object
//!
//! One retrieved restaurant review as returned by the retrieval backend.
//! Records are produced ranked most-relevant-first by the backend and are
//! held read-only for the lifetime of one search.

use serde::{Deserialize, Serialize};

/// Value Object: Ranked Review Search Result
///
/// Field names follow the retrieval RPC payload
/// (`hybrid_search_restaurant_reviews` / `search_restaurant_reviews`).
/// Ranking is the backend's responsibility; results are never re-sorted,
/// re-filtered or deduplicated client-side.
///
/// ## Example
///
/// ```rust
/// use rrs_domain::value_objects::ReviewResult;
///
/// let result = ReviewResult {
///     id: 42,
///     restaurant_name: "Jake's Famous Crawfish".to_string(),
///     location: "401 SW 12th Ave, Portland, OR".to_string(),
///     title: "Old-school seafood done right".to_string(),
///     short_review: "The crab cakes alone are worth the trip.".to_string(),
///     link: "https://example.com/reviews/42".to_string(),
///     overall_score: Some(4.5),
///     similarity: Some(0.91),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewResult {
    /// Unique identifier of the review row
    #[serde(default)]
    pub id: i64,
    /// Name of the reviewed restaurant
    #[serde(default)]
    pub restaurant_name: String,
    /// Location or address of the restaurant
    #[serde(default)]
    pub location: String,
    /// Review title
    #[serde(default)]
    pub title: String,
    /// Short review body text
    #[serde(default)]
    pub short_review: String,
    /// Link to the review source
    #[serde(default)]
    pub link: String,
    /// Overall rating given by the reviewer, when available
    #[serde(default)]
    pub overall_score: Option<f64>,
    /// Relevance/similarity score assigned by the retrieval backend
    #[serde(default)]
    pub similarity: Option<f64>,
}
