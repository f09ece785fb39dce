//! Translation of a parsed disruption document into a GTFS-RT feed.
//!
//! The engine is a pure function of its input: it performs no I/O and keeps
//! no state between calls.

mod description;
mod entity;
mod error;
mod header;
mod line;
mod time;
mod validity;

pub use description::translate_description;
pub use entity::{TRIP_UPDATE_ID_PREFIX, map_disruption};
pub use error::{TranslateError, TranslateResult};
pub use header::{GTFS_REALTIME_VERSION, build_header};
pub use line::LineTarget;
pub use time::parse_iso8601;
pub use validity::{ResolvedValidity, resolve_validity};

use tracing::info;

use crate::gtfs_rt::FeedMessage;
use crate::source::DisruptionFeed;

/// Builds a full-dataset feed message from a disruption document.
///
/// # Errors
///
/// The first disruption that fails to translate aborts the whole feed.
#[tracing::instrument(skip_all, fields(disruptions = feed.disruptions.len()))]
pub fn translate(feed: &DisruptionFeed, agency_id: &str) -> TranslateResult<FeedMessage> {
    let header = build_header(feed.time.as_deref())?;

    let mut entity = Vec::with_capacity(feed.disruptions.len() * 2);
    for disruption in &feed.disruptions {
        entity.extend(map_disruption(disruption, agency_id)?);
    }

    info!(
        entities = entity.len(),
        timestamp = header.timestamp,
        "Feed translated"
    );

    Ok(FeedMessage { header, entity })
}
