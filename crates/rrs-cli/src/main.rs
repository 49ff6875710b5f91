//! Restaurant Review Search CLI
//!
//! Thin rendering collaborator over the search session: loads client
//! configuration, runs one search through the full pipeline, and renders
//! the resolved state snapshot. The orchestration itself lives entirely
//! in `rrs-application`; this binary only observes snapshots.

mod config;
mod output;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rrs_application::SearchSession;
use rrs_domain::constants::UI_MATCH_COUNT_MAX;
use rrs_domain::value_objects::{SearchOptions, SearchSnapshot};
use rrs_providers::embedding::EdgeEmbeddingProvider;
use rrs_providers::search::PostgrestSearchProvider;
use rrs_providers::{EmbeddingProvider, ReviewSearchProvider};

use config::ClientConfig;

/// Command line interface for Restaurant Review Search
#[derive(Parser, Debug)]
#[command(name = "rrs")]
#[command(about = "Search restaurant reviews with natural language")]
#[command(version)]
struct Cli {
    /// Natural-language search query
    query: String,

    /// Maximum results to return (UI range; the backend accepts up to 100)
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=UI_MATCH_COUNT_MAX as u64))]
    match_count: u64,

    /// Use pure vector similarity search with this threshold (0..1)
    /// instead of hybrid retrieval
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    // Missing backend access fails here, loudly, before any request
    let config = ClientConfig::load(cli.config.as_deref())?;

    let timeout = Duration::from_secs(config.timeout_secs);
    let http_client = reqwest::Client::builder().timeout(timeout).build()?;

    let embedding: Arc<dyn EmbeddingProvider> = Arc::new(EdgeEmbeddingProvider::new(
        config.backend.url.clone(),
        config.backend.anon_key.clone(),
        timeout,
        http_client.clone(),
    ));
    let search: Arc<dyn ReviewSearchProvider> = Arc::new(PostgrestSearchProvider::new(
        config.backend.url,
        config.backend.anon_key,
        timeout,
        http_client,
    ));

    let match_count = cli.match_count as usize;

    let snapshot = match cli.threshold {
        // Alternate retrieval mode: embed, then pure vector similarity
        Some(threshold) => match embedding.embed(&cli.query).await {
            Ok(query_embedding) => {
                match search
                    .vector_search(&query_embedding, threshold, match_count)
                    .await
                {
                    Ok(results) => SearchSnapshot {
                        query: cli.query.clone(),
                        results,
                        loading: false,
                        error: None,
                    },
                    Err(e) => failed_snapshot(&cli.query, &e),
                }
            }
            Err(e) => failed_snapshot(&cli.query, &e),
        },
        // Default mode: the full hybrid session
        None => {
            let session = SearchSession::new(embedding, search);
            let _ = session.search(&cli.query, SearchOptions { match_count }).await;
            session.snapshot()
        }
    };

    print!("{}", output::render_snapshot(&snapshot));

    if snapshot.error.is_some() {
        std::process::exit(1);
    }
    Ok(())
}

fn failed_snapshot(query: &str, error: &rrs_domain::Error) -> SearchSnapshot {
    SearchSnapshot {
        query: query.to_string(),
        results: Vec::new(),
        loading: false,
        error: Some(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_count_flag_is_bounded_by_the_ui_range() {
        let within = Cli::try_parse_from(["rrs", "pho", "--match-count", "50"]).unwrap();
        assert_eq!(within.match_count, UI_MATCH_COUNT_MAX as u64);

        assert!(Cli::try_parse_from(["rrs", "pho", "--match-count", "51"]).is_err());
        assert!(Cli::try_parse_from(["rrs", "pho", "--match-count", "0"]).is_err());
    }

    #[test]
    fn match_count_defaults_to_ten() {
        let cli = Cli::try_parse_from(["rrs", "pho"]).unwrap();
        assert_eq!(cli.match_count, 10);
        assert!(cli.threshold.is_none());
    }
}
