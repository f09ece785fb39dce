//! ISO-8601 parsing and the two renderings the feed needs: UTC epoch seconds
//! and the wall-clock `YYYYMMDD` / `HH:MM:SS` pair of a trip start.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use super::error::{TranslateError, TranslateResult};

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses an ISO-8601 date-time, keeping the offset it was written in.
///
/// Values without an offset are taken to be UTC; a bare date is midnight UTC.
pub fn parse_iso8601(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt);
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Parses a required timestamp attribute into UTC epoch seconds.
pub fn epoch_seconds(
    context: &str,
    field: &'static str,
    value: Option<&str>,
) -> TranslateResult<u64> {
    value
        .and_then(parse_iso8601)
        .and_then(|dt| u64::try_from(dt.timestamp()).ok())
        .ok_or_else(|| TranslateError::MalformedTimestamp {
            context: context.to_string(),
            field,
            value: value.map(str::to_string),
        })
}

/// Formats the represented local calendar fields as GTFS start date and time.
pub fn start_date_and_time(dt: &DateTime<FixedOffset>) -> (String, String) {
    (
        dt.format("%Y%m%d").to_string(),
        dt.format("%H:%M:%S").to_string(),
    )
}
