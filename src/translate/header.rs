use crate::gtfs_rt::{FeedHeader, feed_header::Incrementality};

use super::error::{FEED_CONTEXT, TranslateResult};
use super::time::epoch_seconds;

pub const GTFS_REALTIME_VERSION: &str = "1.0";

/// Builds the full-dataset header stamped with the source feed's `time`.
pub fn build_header(time: Option<&str>) -> TranslateResult<FeedHeader> {
    Ok(FeedHeader {
        gtfs_realtime_version: GTFS_REALTIME_VERSION.to_string(),
        incrementality: Some(Incrementality::FullDataset as i32),
        timestamp: Some(epoch_seconds(FEED_CONTEXT, "time", time)?),
        feed_version: None,
    })
}
