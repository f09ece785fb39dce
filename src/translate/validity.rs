use crate::gtfs_rt::TimeRange;
use crate::source::Validity;

use super::error::{TranslateError, TranslateResult};
use super::time::epoch_seconds;

/// Status value marking a disruption retracted upstream.
const DELETED_STATUS: &str = "0";

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedValidity {
    /// Shared by the alert and its trip update.
    pub is_deleted: bool,
    pub active_period: TimeRange,
}

/// Reads the deletion flag and the single active period of a disruption.
pub fn resolve_validity(
    disruption_id: &str,
    validity: Option<&Validity>,
) -> TranslateResult<ResolvedValidity> {
    let validity = validity.ok_or_else(|| TranslateError::MissingValidity {
        disruption_id: disruption_id.to_string(),
    })?;

    let start = epoch_seconds(disruption_id, "from", validity.from.as_deref())?;
    let end = epoch_seconds(disruption_id, "to", validity.to.as_deref())?;

    Ok(ResolvedValidity {
        is_deleted: validity.status.as_deref() == Some(DELETED_STATUS),
        active_period: TimeRange {
            start: Some(start),
            end: Some(end),
        },
    })
}
