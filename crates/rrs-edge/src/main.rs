//! Embedding edge service binary
//!
//! Stateless HTTP process fronting the Gemini embedding API for the
//! search clients. See `rrs_edge` for the request contract.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rrs_edge::EdgeConfig;

/// Command line interface for the embedding edge service
#[derive(Parser, Debug)]
#[command(name = "rrs-edge")]
#[command(about = "Restaurant Review Search - embedding edge service")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.or_else(EdgeConfig::default_config_path);
    let config = EdgeConfig::load(config_path.as_deref())?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        model = %config.gemini.model,
        "starting embedding edge service"
    );

    let rocket = rrs_edge::rocket(&config)?;
    rocket.launch().await?;

    Ok(())
}
