//! Search-Related Value Objects
//!
//! Options for one search invocation and the session state snapshot a
//! renderer observes.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MATCH_COUNT;
use crate::value_objects::ReviewResult;

/// Value Object: Search Options
///
/// Immutable per search invocation.
///
/// ## Business Rules
///
/// - `match_count` must fall in the server-side range [1, 100]; the range
///   is validated before dispatch, never clamped
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results to return
    pub match_count: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            match_count: DEFAULT_MATCH_COUNT,
        }
    }
}

/// Value Object: Search Session Snapshot
///
/// The full observable state of one search session. A renderer can draw
/// deterministically from a snapshot alone; there are no side channels.
///
/// ## Business Rules
///
/// - Replaced wholesale on every transition, never mutated in place
/// - `error` is only set after loading ends; `loading` and `error` are
///   never both active for the same request lifecycle transition
/// - Success with zero results is not an error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchSnapshot {
    /// The query text of the most recent search, empty when idle
    pub query: String,
    /// Results of the most recently resolved search
    pub results: Vec<ReviewResult>,
    /// Whether a search is currently in flight
    pub loading: bool,
    /// Failure message of the most recently resolved search, if it failed
    pub error: Option<String>,
}

impl SearchSnapshot {
    /// The initial idle state: empty query, no results, no error
    pub fn idle() -> Self {
        Self::default()
    }
}
