use anyhow::{Context, Result};

use crate::sizing::profile::ProfileName;

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on unparseable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub sizing_profile: ProfileName,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Used by `from_env` and by tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            sizing_profile: lookup("SIZING_PROFILE")
                .unwrap_or_else(|| "tuned".to_string())
                .parse::<ProfileName>()
                .context("SIZING_PROFILE must be 'tuned' or 'mimic'")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
