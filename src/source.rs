//! Typed schema for the upstream disruption XML document.
//!
//! Every attribute is kept as an `Option<String>`: the document is loosely
//! typed and conversions happen in [`crate::translate`], where failures can be
//! reported with the disruption id and the offending field.

use serde::Deserialize;

/// Root `DISRUPTIONS` element.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DisruptionFeed {
    /// Feed generation time (ISO-8601).
    #[serde(rename = "@time")]
    pub time: Option<String>,
    #[serde(rename = "DISRUPTION", default)]
    pub disruptions: Vec<Disruption>,
}

/// A single `DISRUPTION` record.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Disruption {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    /// Integer effect code; `1` means no service.
    #[serde(rename = "@effect")]
    pub effect: Option<String>,
    #[serde(rename = "TARGETS")]
    pub targets: Option<Targets>,
    #[serde(rename = "VALIDITY")]
    pub validity: Option<Validity>,
    #[serde(rename = "INFO")]
    pub info: Option<Info>,
}

impl Disruption {
    /// Affected lines in document order; an absent `TARGETS` has none.
    pub fn lines(&self) -> &[Line] {
        self.targets.as_ref().map_or(&[][..], |t| t.lines.as_slice())
    }

    /// Description texts in document order; an absent `INFO` has none.
    pub fn texts(&self) -> &[Text] {
        self.info.as_ref().map_or(&[][..], |i| i.texts.as_slice())
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Targets {
    #[serde(rename = "LINE", default)]
    pub lines: Vec<Line>,
}

/// One affected route, optionally pinned to a single departure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Line {
    #[serde(rename = "@route_type")]
    pub route_type: Option<String>,
    #[serde(rename = "@id")]
    pub id: Option<String>,
    /// 1-based direction.
    #[serde(rename = "@direction")]
    pub direction: Option<String>,
    #[serde(rename = "@deptime")]
    pub deptime: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Validity {
    /// `"0"` marks a record retracted upstream.
    #[serde(rename = "@status")]
    pub status: Option<String>,
    #[serde(rename = "@from")]
    pub from: Option<String>,
    #[serde(rename = "@to")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Info {
    #[serde(rename = "TEXT", default)]
    pub texts: Vec<Text>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Text {
    #[serde(rename = "@lang")]
    pub lang: Option<String>,
    /// Body with surrounding whitespace trimmed.
    #[serde(rename = "$text", default)]
    pub body: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("Malformed disruption XML: {0}")]
    Xml(#[from] quick_xml::DeError),
}

/// Parses a raw disruption document. Each call builds its own tree.
pub fn parse_disruption_feed(bytes: &[u8]) -> Result<DisruptionFeed, SourceError> {
    Ok(quick_xml::de::from_reader(bytes)?)
}
