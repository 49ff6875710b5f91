//! Search Session
//!
//! The orchestrator of one search lifecycle. Sequences the embedding
//! provider and the retrieval provider (the second call needs the first's
//! output, so there is no speculative parallelism) and publishes
//! [`SearchSnapshot`] values over a watch channel. A renderer draws from
//! snapshots alone; there are no ambient globals.
//!
//! ## State machine
//!
//! Idle (initial) -> Loading -> (Success | Failed); any state returns to
//! Loading via [`SearchSession::search`] and to Idle via
//! [`SearchSession::clear`].
//!
//! ## Supersession
//!
//! Every `search()` bumps a monotonically increasing request token. An
//! in-flight resolution is applied to the published state only if its
//! token is still the most recently issued; stale resolutions from a
//! superseded or cleared search are discarded silently. No network
//! cancellation is attempted, only result-discarding.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, warn};

use rrs_domain::error::Result;
use rrs_domain::ports::providers::{EmbeddingProvider, ReviewSearchProvider};
use rrs_domain::value_objects::{ReviewResult, SearchOptions, SearchSnapshot};

/// The search session state machine
///
/// Holds exactly one mutable search state, replaced wholesale on every
/// transition. Methods take `&self`; the session is shared behind an
/// `Arc` and no lock is held across an await point.
pub struct SearchSession {
    embedding: Arc<dyn EmbeddingProvider>,
    search: Arc<dyn ReviewSearchProvider>,
    state_tx: watch::Sender<SearchSnapshot>,
    /// Monotonically increasing token; the latest `search()`/`clear()` owns
    /// the published state
    issued: AtomicU64,
    /// The last search request, for `retry()`
    last_request: Mutex<Option<(String, SearchOptions)>>,
}

impl SearchSession {
    /// Create a session in the Idle state
    pub fn new(
        embedding: Arc<dyn EmbeddingProvider>,
        search: Arc<dyn ReviewSearchProvider>,
    ) -> Self {
        let (state_tx, _) = watch::channel(SearchSnapshot::idle());
        Self {
            embedding,
            search,
            state_tx,
            issued: AtomicU64::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Get the current state snapshot
    pub fn snapshot(&self) -> SearchSnapshot {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state transitions
    ///
    /// Each transition publishes the full snapshot; a renderer can draw
    /// deterministically from any received value.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.state_tx.subscribe()
    }

    /// Perform a search
    ///
    /// Transitions to Loading immediately: the query is recorded, the
    /// prior error is cleared, and prior results are retained until
    /// resolution so a retry does not blank the list mid-flight. Then
    /// generates the embedding and runs the hybrid retrieval, serially.
    ///
    /// On success the state becomes Success with the returned records in
    /// backend order; on any failure it becomes Failed with the failure's
    /// message and an empty result set. Results from a failed second step
    /// are never partially applied. The outcome is also returned to the
    /// caller, whether or not it was applied to the published state.
    pub async fn search(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<ReviewResult>> {
        let token = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut last = self
                .last_request
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            *last = Some((query.to_string(), options));
        }

        let prior_results = self.state_tx.borrow().results.clone();
        self.publish_if_current(
            token,
            SearchSnapshot {
                query: query.to_string(),
                results: prior_results,
                loading: true,
                error: None,
            },
        );

        let outcome = self.run_pipeline(query, options).await;

        match outcome {
            Ok(results) => {
                let applied = self.publish_if_current(
                    token,
                    SearchSnapshot {
                        query: query.to_string(),
                        results: results.clone(),
                        loading: false,
                        error: None,
                    },
                );
                if !applied {
                    debug!(token, "discarding superseded search resolution");
                }
                Ok(results)
            }
            Err(err) => {
                warn!(token, error = %err, "search failed");
                let applied = self.publish_if_current(
                    token,
                    SearchSnapshot {
                        query: query.to_string(),
                        results: Vec::new(),
                        loading: false,
                        error: Some(err.to_string()),
                    },
                );
                if !applied {
                    debug!(token, "discarding superseded search failure");
                }
                Err(err)
            }
        }
    }

    /// Re-invoke the last search with its recorded query and options
    ///
    /// A no-op returning `Ok(None)` when no search was recorded (or the
    /// session was cleared since).
    pub async fn retry(&self) -> Result<Option<Vec<ReviewResult>>> {
        let last = {
            let guard = self
                .last_request
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            guard.clone()
        };

        match last {
            Some((query, options)) => self.search(&query, options).await.map(Some),
            None => Ok(None),
        }
    }

    /// Reset to the Idle state
    ///
    /// Empties query, results and error regardless of the current state.
    /// Bumps the request token so an in-flight search that resolves later
    /// cannot resurrect stale state. Idempotent.
    pub fn clear(&self) {
        self.issued.fetch_add(1, Ordering::SeqCst);
        {
            let mut last = self
                .last_request
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            *last = None;
        }
        self.state_tx.send_replace(SearchSnapshot::idle());
    }

    /// The two-stage pipeline: embedding, then hybrid retrieval
    async fn run_pipeline(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<ReviewResult>> {
        let embedding = self.embedding.embed(query).await?;
        debug!(
            provider = self.embedding.provider_name(),
            dimensions = embedding.dimensions,
            "embedding generated"
        );

        let results = self
            .search
            .hybrid_search(query, &embedding, options.match_count)
            .await?;
        debug!(
            provider = self.search.provider_name(),
            count = results.len(),
            "hybrid search resolved"
        );

        Ok(results)
    }

    /// Replace the published snapshot only if `token` is still the most
    /// recently issued request
    fn publish_if_current(&self, token: u64, next: SearchSnapshot) -> bool {
        self.state_tx.send_if_modified(|state| {
            if self.issued.load(Ordering::SeqCst) != token {
                return false;
            }
            *state = next;
            true
        })
    }
}
