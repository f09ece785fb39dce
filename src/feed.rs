//! The request pipeline: fetch, parse and translate, with a fresh document
//! and message per call.

use tracing::info;

use crate::config::Config;
use crate::fetch::{HttpClient, fetch_bytes};
use crate::gtfs_rt::FeedMessage;
use crate::source::{SourceError, parse_disruption_feed};
use crate::translate::{TranslateError, translate};

#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("Failed to fetch disruption feed: {0:#}")]
    Fetch(anyhow::Error),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}

/// Parses and translates an already retrieved source document.
pub fn convert_bytes(bytes: &[u8], agency_id: &str) -> Result<FeedMessage, FeedError> {
    let document = parse_disruption_feed(bytes)?;
    Ok(translate(&document, agency_id)?)
}

/// Fetches the configured source document and translates it.
#[tracing::instrument(skip_all, fields(url = %config.source_url))]
pub async fn generate_feed<C: HttpClient>(client: &C, config: &Config) -> Result<FeedMessage, FeedError> {
    let bytes = fetch_bytes(client, &config.source_url)
        .await
        .map_err(FeedError::Fetch)?;
    let feed = convert_bytes(&bytes, &config.agency_id)?;
    info!(entities = feed.entity.len(), "Feed generated");
    Ok(feed)
}
