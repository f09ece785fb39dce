//! Target line mapping: one `LINE` element becomes one informed entity, and
//! its route, direction and departure are mirrored onto a cancelled trip.

use crate::gtfs_rt::{EntitySelector, TripDescriptor};
use crate::source::Line;

use super::error::{TranslateError, TranslateResult};
use super::time::{parse_iso8601, start_date_and_time};

/// Typed view of a `LINE` element. Each attribute group is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTarget {
    pub route_type: Option<i32>,
    pub route_id: Option<String>,
    /// 0-based; only read when the line has a route id.
    pub direction_id: Option<u32>,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn invalid(disruption_id: &str, attribute: &'static str, value: &str) -> TranslateError {
    TranslateError::InvalidLineAttribute {
        disruption_id: disruption_id.to_string(),
        attribute,
        value: value.to_string(),
    }
}

impl LineTarget {
    pub fn from_line(disruption_id: &str, line: &Line) -> TranslateResult<Self> {
        let mut target = LineTarget::default();

        if let Some(raw) = present(line.route_type.as_deref()) {
            let route_type = raw
                .trim()
                .parse::<i32>()
                .map_err(|_| invalid(disruption_id, "route_type", raw))?;
            target.route_type = Some(route_type);
        }

        if let Some(route_id) = present(line.id.as_deref()) {
            target.route_id = Some(route_id.to_string());

            if let Some(raw) = present(line.direction.as_deref()) {
                let direction = raw
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .and_then(|d| d.checked_sub(1))
                    .ok_or_else(|| invalid(disruption_id, "direction", raw))?;
                target.direction_id = Some(direction);
            }
        }

        if let Some(raw) = present(line.deptime.as_deref()) {
            let departure = parse_iso8601(raw).ok_or_else(|| invalid(disruption_id, "deptime", raw))?;
            let (date, time) = start_date_and_time(&departure);
            target.start_date = Some(date);
            target.start_time = Some(time);
        }

        Ok(target)
    }

    /// The trip this line pins down, if it names a route or a departure.
    pub fn trip(&self) -> Option<TripDescriptor> {
        if self.route_id.is_none() && self.start_date.is_none() {
            return None;
        }

        Some(TripDescriptor {
            route_id: self.route_id.clone(),
            direction_id: self.direction_id,
            start_date: self.start_date.clone(),
            start_time: self.start_time.clone(),
            ..Default::default()
        })
    }

    pub fn informed_entity(&self, agency_id: &str) -> EntitySelector {
        EntitySelector {
            agency_id: Some(agency_id.to_string()),
            route_id: self.route_id.clone(),
            route_type: self.route_type,
            trip: self.trip(),
            ..Default::default()
        }
    }

    /// Writes this line's route and departure onto a trip-update descriptor.
    ///
    /// Later lines overwrite earlier ones group by group, so a line without a
    /// route id leaves the route and direction untouched.
    pub fn apply_to(&self, mut trip: TripDescriptor) -> TripDescriptor {
        if self.route_id.is_some() {
            trip.route_id = self.route_id.clone();
            if self.direction_id.is_some() {
                trip.direction_id = self.direction_id;
            }
        }
        if self.start_date.is_some() {
            trip.start_date = self.start_date.clone();
            trip.start_time = self.start_time.clone();
        }
        trip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(route_type: Option<&str>, id: Option<&str>, direction: Option<&str>, deptime: Option<&str>) -> Line {
        Line {
            route_type: route_type.map(str::to_string),
            id: id.map(str::to_string),
            direction: direction.map(str::to_string),
            deptime: deptime.map(str::to_string),
        }
    }

    #[test]
    fn test_direction_is_zero_based() {
        let target = LineTarget::from_line("42", &line(None, Some("550"), Some("2"), None)).unwrap();

        assert_eq!(target.route_id.as_deref(), Some("550"));
        assert_eq!(target.direction_id, Some(1));

        let first = LineTarget::from_line("42", &line(None, Some("550"), Some("1"), None)).unwrap();
        assert_eq!(first.direction_id, Some(0));
    }

    #[test]
    fn test_absent_direction_leaves_direction_unset() {
        let target = LineTarget::from_line("42", &line(None, Some("550"), None, None)).unwrap();
        assert_eq!(target.direction_id, None);

        let empty = LineTarget::from_line("42", &line(None, Some("550"), Some(""), None)).unwrap();
        assert_eq!(empty.direction_id, None);
    }

    #[test]
    fn test_direction_ignored_without_route_id() {
        let target = LineTarget::from_line("42", &line(None, None, Some("x"), None)).unwrap();
        assert_eq!(target, LineTarget::default());
    }

    #[test]
    fn test_empty_attributes_are_absent() {
        let target = LineTarget::from_line("42", &line(Some(""), Some(""), Some(""), Some(""))).unwrap();
        assert_eq!(target, LineTarget::default());
        assert_eq!(target.trip(), None);
    }

    #[test]
    fn test_route_type_only() {
        let target = LineTarget::from_line("42", &line(Some("3"), None, None, None)).unwrap();
        let informed = target.informed_entity("HSL");

        assert_eq!(informed.agency_id.as_deref(), Some("HSL"));
        assert_eq!(informed.route_type, Some(3));
        assert_eq!(informed.route_id, None);
        assert_eq!(informed.trip, None);
    }

    #[test]
    fn test_deptime_sets_start_date_and_time() {
        let target = LineTarget::from_line(
            "42",
            &line(None, None, None, Some("2023-03-05T07:45:00+02:00")),
        )
        .unwrap();
        let trip = target.trip().unwrap();

        assert_eq!(trip.start_date.as_deref(), Some("20230305"));
        assert_eq!(trip.start_time.as_deref(), Some("07:45:00"));
        assert_eq!(trip.route_id, None);
    }

    #[test]
    fn test_informed_entity_mirrors_route_on_trip() {
        let target = LineTarget::from_line("42", &line(None, Some("550"), Some("2"), None)).unwrap();
        let informed = target.informed_entity("HSL");
        let trip = informed.trip.unwrap();

        assert_eq!(informed.route_id.as_deref(), Some("550"));
        assert_eq!(trip.route_id.as_deref(), Some("550"));
        assert_eq!(trip.direction_id, Some(1));
        assert_eq!(trip.schedule_relationship, None);
    }

    #[test]
    fn test_invalid_attributes() {
        let err = LineTarget::from_line("42", &line(Some("bus"), None, None, None)).unwrap_err();
        assert_eq!(
            err,
            TranslateError::InvalidLineAttribute {
                disruption_id: "42".to_string(),
                attribute: "route_type",
                value: "bus".to_string(),
            }
        );

        assert!(LineTarget::from_line("42", &line(None, Some("550"), Some("two"), None)).is_err());
        assert!(LineTarget::from_line("42", &line(None, Some("550"), Some("0"), None)).is_err());
        assert!(LineTarget::from_line("42", &line(None, None, None, Some("noon"))).is_err());
    }

    #[test]
    fn test_apply_to_overwrites_by_group() {
        let first = LineTarget::from_line(
            "42",
            &line(None, Some("550"), Some("1"), Some("2023-01-01T08:00:00Z")),
        )
        .unwrap();
        let second = LineTarget::from_line("42", &line(Some("3"), Some("551"), None, None)).unwrap();

        let trip = second.apply_to(first.apply_to(TripDescriptor::default()));

        assert_eq!(trip.route_id.as_deref(), Some("551"));
        assert_eq!(trip.direction_id, Some(0));
        assert_eq!(trip.start_date.as_deref(), Some("20230101"));
        assert_eq!(trip.start_time.as_deref(), Some("08:00:00"));
    }
}
