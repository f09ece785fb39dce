//! Process configuration, read from the environment.
//!
//! `.env` is loaded by the binary before [`Config::from_env`] runs.

use anyhow::{Context, Result};

pub const DEFAULT_AGENCY_ID: &str = "HSL";
pub const DEFAULT_SOURCE_URL: &str = "http://www.poikkeusinfo.fi/xml/v3";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Written into every informed entity.
    pub agency_id: String,
    pub source_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agency_id: DEFAULT_AGENCY_ID.to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Self {
            agency_id: lookup("AGENCY_ID").unwrap_or(defaults.agency_id),
            source_url: lookup("DISRUPTION_FEED_URL").unwrap_or(defaults.source_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
        })
    }
}
