//! Feed encodings: canonical protobuf bytes, or a pretty-printed JSON
//! rendering of the same message for debugging.

use anyhow::Result;
use prost::Message;
use tracing::debug;

use crate::gtfs_rt::FeedMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Binary,
    Debug,
}

impl Encoding {
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug { Encoding::Debug } else { Encoding::Binary }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Encoding::Binary => "application/x-protobuf",
            Encoding::Debug => "application/json",
        }
    }
}

/// Serializes a [`FeedMessage`] in the requested encoding.
pub fn encode(feed: &FeedMessage, encoding: Encoding) -> Result<Vec<u8>> {
    let bytes = match encoding {
        Encoding::Binary => feed.encode_to_vec(),
        Encoding::Debug => serde_json::to_vec_pretty(feed)?,
    };
    debug!(?encoding, bytes = bytes.len(), "Feed encoded");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gtfs_rt::{Alert, FeedEntity, FeedHeader, TimeRange, feed_header::Incrementality};
    use crate::parser::parse_feed;

    fn sample_feed() -> FeedMessage {
        FeedMessage {
            header: FeedHeader {
                gtfs_realtime_version: "1.0".to_string(),
                incrementality: Some(Incrementality::FullDataset as i32),
                timestamp: Some(1672531200),
                feed_version: None,
            },
            entity: vec![FeedEntity {
                id: "42".to_string(),
                is_deleted: Some(false),
                alert: Some(Alert {
                    active_period: vec![TimeRange {
                        start: Some(1672531200),
                        end: Some(1672574400),
                    }],
                    effect: Some(1),
                    ..Default::default()
                }),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_binary_round_trip() {
        let feed = sample_feed();
        let bytes = encode(&feed, Encoding::Binary).unwrap();
        assert_eq!(parse_feed(&bytes).unwrap(), feed);
    }

    #[test]
    fn test_debug_renders_same_values() {
        let bytes = encode(&sample_feed(), Encoding::Debug).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["header"]["gtfs_realtime_version"], "1.0");
        assert_eq!(value["header"]["timestamp"], 1672531200);
        assert_eq!(value["entity"][0]["id"], "42");
        assert_eq!(value["entity"][0]["is_deleted"], false);
        assert_eq!(value["entity"][0]["alert"]["effect"], 1);
        assert_eq!(value["entity"][0]["alert"]["active_period"][0]["end"], 1672574400);
    }

    #[test]
    fn test_encoding_selection() {
        assert_eq!(Encoding::from_debug_flag(true), Encoding::Debug);
        assert_eq!(Encoding::from_debug_flag(false), Encoding::Binary);
        assert_eq!(Encoding::default().content_type(), "application/x-protobuf");
        assert_eq!(Encoding::Debug.content_type(), "application/json");
    }
}
