/// Context used for failures that belong to the feed header rather than to a
/// single disruption.
pub const FEED_CONTEXT: &str = "feed";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Malformed timestamp in {context} field `{field}`: {value:?}")]
    MalformedTimestamp {
        context: String,
        field: &'static str,
        value: Option<String>,
    },

    #[error("Invalid effect code on disruption {disruption_id}: {value:?}")]
    InvalidEffectCode {
        disruption_id: String,
        value: Option<String>,
    },

    #[error("Invalid line attribute `{attribute}` on disruption {disruption_id}: {value:?}")]
    InvalidLineAttribute {
        disruption_id: String,
        attribute: &'static str,
        value: String,
    },

    #[error("Disruption {disruption_id} has no VALIDITY element")]
    MissingValidity { disruption_id: String },

    #[error("Disruption without an id")]
    MissingDisruptionId,
}

pub type TranslateResult<T> = Result<T, TranslateError>;
