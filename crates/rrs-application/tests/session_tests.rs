//! Unit tests for the search session state machine

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use rrs_application::SearchSession;
use rrs_domain::error::{Error, Result};
use rrs_domain::ports::providers::{EmbeddingProvider, ReviewSearchProvider};
use rrs_domain::validation::{validate_match_count, validate_query_text};
use rrs_domain::value_objects::{Embedding, ReviewResult, SearchOptions, SearchSnapshot};

/// Embedding stub with the same validation behavior as the real provider.
///
/// Optionally gates a specific query text: the call signals `entered` and
/// then waits on `gate`, letting a test control resolution order.
struct StubEmbedding {
    calls: AtomicUsize,
    fail_first: usize,
    gated_query: Option<String>,
    entered: Arc<Notify>,
    gate: Arc<Notify>,
}

impl StubEmbedding {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_first: 0,
            gated_query: None,
            entered: Arc::new(Notify::new()),
            gate: Arc::new(Notify::new()),
        }
    }

    fn failing_first(n: usize) -> Self {
        Self {
            fail_first: n,
            ..Self::new()
        }
    }

    fn gated_on(query: &str) -> Self {
        Self {
            gated_query: Some(query.to_string()),
            ..Self::new()
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbedding {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let trimmed = validate_query_text(text)?;
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if self.gated_query.as_deref() == Some(trimmed.as_str()) {
            self.entered.notify_one();
            self.gate.notified().await;
        }

        if call < self.fail_first {
            return Err(Error::embedding("upstream down"));
        }

        Ok(Embedding::new(vec![0.0; 768], "stub"))
    }

    fn dimensions(&self) -> usize {
        768
    }

    fn provider_name(&self) -> &str {
        "stub-embedding"
    }
}

/// Search stub that echoes the query into the returned record, so a test
/// can tell which search's outcome was applied.
struct StubSearch {
    records_per_query: usize,
    fail: bool,
}

impl StubSearch {
    fn returning(records_per_query: usize) -> Self {
        Self {
            records_per_query,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            records_per_query: 0,
            fail: true,
        }
    }
}

fn record_for(query: &str, index: usize) -> ReviewResult {
    ReviewResult {
        id: index as i64,
        restaurant_name: format!("{query} #{index}"),
        location: "Portland, OR".to_string(),
        title: format!("Review of {query}"),
        short_review: "Solid.".to_string(),
        link: format!("https://example.com/{query}/{index}"),
        overall_score: Some(4.0),
        similarity: Some(0.9 - index as f64 * 0.01),
    }
}

#[async_trait]
impl ReviewSearchProvider for StubSearch {
    async fn hybrid_search(
        &self,
        query: &str,
        _embedding: &Embedding,
        match_count: usize,
    ) -> Result<Vec<ReviewResult>> {
        validate_match_count(match_count)?;
        if self.fail {
            return Err(Error::search("hybrid search exploded"));
        }
        Ok((0..self.records_per_query)
            .map(|i| record_for(query, i))
            .collect())
    }

    async fn vector_search(
        &self,
        _embedding: &Embedding,
        _match_threshold: f64,
        match_count: usize,
    ) -> Result<Vec<ReviewResult>> {
        validate_match_count(match_count)?;
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "stub-search"
    }
}

fn session_with(
    embedding: StubEmbedding,
    search: StubSearch,
) -> (Arc<SearchSession>, Arc<StubEmbedding>) {
    let embedding = Arc::new(embedding);
    let session = Arc::new(SearchSession::new(
        embedding.clone(),
        Arc::new(search),
    ));
    (session, embedding)
}

#[tokio::test]
async fn search_round_trip_reaches_success() {
    let (session, _) = session_with(StubEmbedding::new(), StubSearch::returning(3));

    let results = session
        .search("best seafood", SearchOptions::default())
        .await
        .unwrap();
    assert_eq!(results.len(), 3);

    let state = session.snapshot();
    assert_eq!(state.query, "best seafood");
    assert_eq!(state.results, results);
    assert_eq!(state.results[0].restaurant_name, "best seafood #0");
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn zero_results_is_success_not_error() {
    let (session, _) = session_with(StubEmbedding::new(), StubSearch::returning(0));

    let results = session
        .search("best seafood in Portland", SearchOptions::default())
        .await
        .unwrap();
    assert!(results.is_empty());

    let state = session.snapshot();
    assert_eq!(
        state,
        SearchSnapshot {
            query: "best seafood in Portland".to_string(),
            results: vec![],
            loading: false,
            error: None,
        }
    );
}

#[tokio::test]
async fn blank_query_fails_without_calling_providers() {
    let (session, embedding) = session_with(StubEmbedding::new(), StubSearch::returning(3));

    for query in ["", "   ", "\t\n"] {
        let result = session.search(query, SearchOptions::default()).await;
        assert!(matches!(result, Err(Error::EmptyQuery)));
    }

    // The stub counts calls after its own validation, mirroring the real
    // provider's fail-fast path: none of these reached the network stage.
    assert_eq!(embedding.call_count(), 0);

    let state = session.snapshot();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("search text cannot be empty"));
    assert!(state.results.is_empty());
}

#[tokio::test]
async fn oversized_query_fails_fast() {
    let (session, embedding) = session_with(StubEmbedding::new(), StubSearch::returning(3));

    let query = "a".repeat(10_001);
    let result = session.search(&query, SearchOptions::default()).await;
    assert!(matches!(result, Err(Error::QueryTooLong { .. })));
    assert_eq!(embedding.call_count(), 0);
}

#[tokio::test]
async fn search_stage_failure_reaches_failed_state() {
    let (session, _) = session_with(StubEmbedding::new(), StubSearch::failing());

    let result = session.search("pho", SearchOptions::default()).await;
    assert!(result.is_err());

    let state = session.snapshot();
    assert_eq!(state.query, "pho");
    assert!(state.results.is_empty());
    assert!(!state.loading);
    assert!(
        state
            .error
            .as_deref()
            .unwrap()
            .contains("hybrid search exploded")
    );
}

#[tokio::test]
async fn clear_is_idempotent() {
    let (session, _) = session_with(StubEmbedding::new(), StubSearch::returning(2));

    session
        .search("ramen", SearchOptions::default())
        .await
        .unwrap();
    assert!(!session.snapshot().results.is_empty());

    session.clear();
    let once = session.snapshot();
    session.clear();
    let twice = session.snapshot();

    assert_eq!(once, SearchSnapshot::idle());
    assert_eq!(once, twice);
}

#[tokio::test]
async fn retry_with_no_recorded_search_is_a_noop() {
    let (session, embedding) = session_with(StubEmbedding::new(), StubSearch::returning(2));

    let outcome = session.retry().await.unwrap();
    assert!(outcome.is_none());
    assert_eq!(embedding.call_count(), 0);
    assert_eq!(session.snapshot(), SearchSnapshot::idle());
}

#[tokio::test]
async fn retry_reissues_identical_request_after_failure() {
    let (session, embedding) = session_with(StubEmbedding::failing_first(1), StubSearch::returning(2));

    let first = session
        .search("best seafood", SearchOptions { match_count: 5 })
        .await;
    assert!(first.is_err());
    let failed = session.snapshot();
    assert!(failed.error.as_deref().unwrap().contains("upstream down"));

    let retried = session.retry().await.unwrap();
    let results = retried.expect("retry should re-issue the recorded search");
    assert_eq!(results.len(), 2);
    assert_eq!(embedding.call_count(), 2);

    let state = session.snapshot();
    assert_eq!(state.query, "best seafood");
    assert!(state.error.is_none());
    assert_eq!(state.results.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn supersession_applies_only_the_latest_search() {
    let embedding = Arc::new(StubEmbedding::gated_on("A"));
    let session = Arc::new(SearchSession::new(
        embedding.clone(),
        Arc::new(StubSearch::returning(1)),
    ));

    // Issue search "A"; its embedding stage parks on the gate.
    let slow = {
        let session = session.clone();
        tokio::spawn(async move { session.search("A", SearchOptions::default()).await })
    };
    embedding.entered.notified().await;

    // Issue search "B" while "A" is still in flight; it resolves first.
    session.search("B", SearchOptions::default()).await.unwrap();
    assert_eq!(session.snapshot().results[0].restaurant_name, "B #0");

    // Release "A"; it resolves successfully but must be discarded.
    embedding.gate.notify_one();
    let stale = slow.await.unwrap().unwrap();
    assert_eq!(stale[0].restaurant_name, "A #0");

    let state = session.snapshot();
    assert_eq!(state.query, "B");
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].restaurant_name, "B #0");
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn clear_discards_in_flight_resolution() {
    let embedding = Arc::new(StubEmbedding::gated_on("A"));
    let session = Arc::new(SearchSession::new(
        embedding.clone(),
        Arc::new(StubSearch::returning(1)),
    ));

    let slow = {
        let session = session.clone();
        tokio::spawn(async move { session.search("A", SearchOptions::default()).await })
    };
    embedding.entered.notified().await;

    session.clear();
    embedding.gate.notify_one();
    let _ = slow.await.unwrap();

    assert_eq!(session.snapshot(), SearchSnapshot::idle());
}

#[tokio::test(flavor = "multi_thread")]
async fn loading_state_retains_stale_results_until_resolution() {
    let embedding = Arc::new(StubEmbedding::gated_on("second"));
    let session = Arc::new(SearchSession::new(
        embedding.clone(),
        Arc::new(StubSearch::returning(2)),
    ));

    session
        .search("first", SearchOptions::default())
        .await
        .unwrap();

    let in_flight = {
        let session = session.clone();
        tokio::spawn(async move { session.search("second", SearchOptions::default()).await })
    };
    embedding.entered.notified().await;

    let loading = session.snapshot();
    assert!(loading.loading);
    assert_eq!(loading.query, "second");
    assert!(loading.error.is_none());
    // Stale-until-resolved: the previous results stay visible mid-flight
    assert_eq!(loading.results[0].restaurant_name, "first #0");

    embedding.gate.notify_one();
    in_flight.await.unwrap().unwrap();

    let resolved = session.snapshot();
    assert!(!resolved.loading);
    assert_eq!(resolved.results[0].restaurant_name, "second #0");
}

#[tokio::test]
async fn subscribers_observe_transitions() {
    let (session, _) = session_with(StubEmbedding::new(), StubSearch::returning(1));
    let mut rx = session.subscribe();

    session
        .search("oysters", SearchOptions::default())
        .await
        .unwrap();

    // The receiver sees the latest snapshot; intermediate loading states
    // may be conflated by the watch channel, the final value is what a
    // renderer draws.
    rx.changed().await.unwrap();
    let seen = rx.borrow_and_update().clone();
    assert_eq!(seen.query, "oysters");
    assert!(!seen.loading);
}

#[tokio::test]
async fn invalid_match_count_fails_without_retrieval_dispatch() {
    let (session, _) = session_with(StubEmbedding::new(), StubSearch::returning(1));

    let result = session
        .search("oysters", SearchOptions { match_count: 0 })
        .await;
    assert!(matches!(result, Err(Error::InvalidMatchCount { .. })));

    let state = session.snapshot();
    assert!(state.error.is_some());
    assert!(state.results.is_empty());
}
