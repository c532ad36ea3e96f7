use anyhow::{bail, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Filter used when neither `RUST_LOG` nor `VAULT_LOG_FILTER` is set
pub const DEFAULT_LOG_FILTER: &str = "info,vault_core=info";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON seed file to load posts from instead of the built-in sample
    pub seed_path: Option<PathBuf>,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_path = lookup("VAULT_SEED_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = match lookup("VAULT_LOG_FILTER") {
            Some(filter) if filter.trim().is_empty() => {
                bail!("VAULT_LOG_FILTER must not be blank when set")
            }
            Some(filter) => filter,
            None => DEFAULT_LOG_FILTER.to_string(),
        };

        Ok(Self {
            seed_path,
            log_filter,
        })
    }
}
