//! Edge service configuration
//!
//! Loaded with Figment: defaults, then an optional TOML file, then
//! `RRS_EDGE_*` environment variables (double underscore separates nested
//! keys, e.g. `RRS_EDGE_SERVER__PORT`). The upstream API key additionally
//! falls back to the plain `GEMINI_API_KEY` environment variable.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use rrs_domain::error::{Error, Result};

/// Environment variable prefix for edge configuration
const CONFIG_ENV_PREFIX: &str = "RRS_EDGE_";

/// Fallback environment variable for the upstream API key
const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

/// Upstream embedding model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Google AI API key; absence is a per-request configuration error,
    /// not a startup failure, matching the deployed edge function
    pub api_key: Option<String>,
    /// Base URL of the Gemini API
    pub base_url: String,
    /// Embedding model name
    pub model: String,
    /// Upstream request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "embedding-001".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Full edge service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EdgeConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream embedding model settings
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl EdgeConfig {
    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later overrides earlier):
    /// 1. Default values
    /// 2. TOML configuration file, if one was given
    /// 3. `RRS_EDGE_*` environment variables
    /// 4. `GEMINI_API_KEY` as an API key fallback
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_path {
            if path.exists() {
                info!(path = %path.display(), "loading edge configuration file");
                figment = figment.merge(Toml::file(path));
            } else {
                warn!(path = %path.display(), "configuration file not found, using defaults");
            }
        }

        figment = figment.merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__"));

        let mut config: Self = figment
            .extract()
            .map_err(|e| Error::config(format!("failed to extract configuration: {e}")))?;

        if config.gemini.api_key.is_none() {
            config.gemini.api_key = env::var(GEMINI_API_KEY_ENV).ok();
        }

        if config.gemini.api_key.as_deref().is_none_or(str::is_empty) {
            // Requests will fail with 500 until a key is provided; the
            // service still starts so the contract surface stays testable.
            warn!("no upstream API key configured, embedding requests will fail");
        }

        Ok(config)
    }

    /// Path of the default configuration file next to the binary, if any
    pub fn default_config_path() -> Option<PathBuf> {
        let path = PathBuf::from("rrs-edge.toml");
        path.exists().then_some(path)
    }
}
