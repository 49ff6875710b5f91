//! Client configuration
//!
//! Loaded with Figment: defaults, then an optional TOML file, then
//! `RRS_*` environment variables (double underscore separates nested
//! keys, e.g. `RRS_BACKEND__URL`). Required values that are absent fail
//! fast and loudly at startup rather than silently degrading.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::info;

use rrs_domain::error::{Error, Result};

/// Environment variable prefix for client configuration
const CONFIG_ENV_PREFIX: &str = "RRS_";

/// Retrieval backend access settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendConfig {
    /// Backend base URL (e.g., "https://project.supabase.co")
    pub url: String,
    /// Backend anonymous access key
    pub anon_key: String,
}

/// Full client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Retrieval backend access settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// Request timeout in seconds for both providers
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later overrides earlier):
    /// 1. Default values
    /// 2. TOML configuration file, if one was given
    /// 3. `RRS_*` environment variables
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_path {
            if path.exists() {
                info!(path = %path.display(), "loading client configuration file");
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__"));

        let config: Self = figment
            .extract()
            .map_err(|e| Error::config(format!("failed to extract configuration: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject a configuration missing required backend access values
    fn validate(&self) -> Result<()> {
        if self.backend.url.trim().is_empty() {
            return Err(Error::config(
                "backend URL is not configured (set RRS_BACKEND__URL)",
            ));
        }
        if self.backend.anon_key.trim().is_empty() {
            return Err(Error::config(
                "backend access key is not configured (set RRS_BACKEND__ANON_KEY)",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_rejected_as_unconfigured() {
        let config = ClientConfig::default();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("backend URL"));
    }

    #[test]
    fn populated_backend_passes_validation() {
        let config = ClientConfig {
            backend: BackendConfig {
                url: "https://project.supabase.co".to_string(),
                anon_key: "anon".to_string(),
            },
            timeout_secs: 30,
        };
        assert!(config.validate().is_ok());
    }
}
