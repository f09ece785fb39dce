//! Decoding of binary feeds produced by [`crate::output::encode`], used by the
//! `inspect` command to render a saved feed.

use anyhow::{Context, Result};
use prost::Message;

use crate::gtfs_rt::FeedMessage;

/// Reads a binary GTFS-RT feed back into a [`FeedMessage`].
pub fn parse_feed(bytes: &[u8]) -> Result<FeedMessage> {
    FeedMessage::decode(bytes).context("not a GTFS-RT FeedMessage")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::convert_bytes;
    use crate::output::{Encoding, encode};
    use crate::test_utils::SAMPLE_FEED;

    #[test]
    fn test_decode_translated_feed() {
        let feed = convert_bytes(SAMPLE_FEED.as_bytes(), "HSL").unwrap();
        let bytes = encode(&feed, Encoding::Binary).unwrap();

        let decoded = parse_feed(&bytes).unwrap();
        assert_eq!(decoded.entity.len(), feed.entity.len());
        assert_eq!(decoded.entity[1].id, "trip_update:42");
        assert_eq!(decoded, feed);
    }

    #[test]
    fn test_truncated_feed_is_rejected() {
        let feed = convert_bytes(SAMPLE_FEED.as_bytes(), "HSL").unwrap();
        let bytes = encode(&feed, Encoding::Binary).unwrap();

        assert!(parse_feed(&bytes[..bytes.len() - 1]).is_err());
    }
}
