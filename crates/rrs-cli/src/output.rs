//! Snapshot rendering
//!
//! Turns a resolved `SearchSnapshot` into terminal output. A failed
//! search shows the message and a retry hint; a successful search with
//! zero records shows a distinct "no results" line, not an error.

use std::fmt::Write as _;

use rrs_domain::value_objects::{ReviewResult, SearchSnapshot};

/// Render a resolved snapshot as displayable text
pub fn render_snapshot(snapshot: &SearchSnapshot) -> String {
    if let Some(error) = &snapshot.error {
        return format!("Search failed: {error}\nRe-run the same command to retry.\n");
    }

    if snapshot.results.is_empty() {
        return format!("No results found for \"{}\".\n", snapshot.query);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} result(s) for \"{}\":\n",
        snapshot.results.len(),
        snapshot.query
    );
    for (rank, result) in snapshot.results.iter().enumerate() {
        let _ = write!(out, "{}", render_result(rank + 1, result));
    }
    out
}

fn render_result(rank: usize, result: &ReviewResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{rank}. {} - {}", result.restaurant_name, result.title);
    let _ = writeln!(out, "   {}", result.location);
    let _ = writeln!(out, "   {}", result.short_review);
    match (result.overall_score, result.similarity) {
        (Some(score), Some(similarity)) => {
            let _ = writeln!(out, "   rating {score:.1}  relevance {similarity:.2}");
        }
        (Some(score), None) => {
            let _ = writeln!(out, "   rating {score:.1}");
        }
        (None, Some(similarity)) => {
            let _ = writeln!(out, "   relevance {similarity:.2}");
        }
        (None, None) => {}
    }
    let _ = writeln!(out, "   {}\n", result.link);
    out
}
