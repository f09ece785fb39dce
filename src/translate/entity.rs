//! Disruption fan-out: every disruption yields an alert, and a cancelled
//! trip update alongside it when the effect is no service.

use tracing::debug;

use crate::gtfs_rt::{
    Alert, FeedEntity, TripDescriptor, TripUpdate, alert::Effect,
    trip_descriptor::ScheduleRelationship,
};
use crate::source::Disruption;

use super::description::translate_description;
use super::error::{TranslateError, TranslateResult};
use super::line::LineTarget;
use super::validity::resolve_validity;

pub const TRIP_UPDATE_ID_PREFIX: &str = "trip_update:";

fn parse_effect(disruption_id: &str, effect: Option<&str>) -> TranslateResult<i32> {
    effect
        .and_then(|e| e.trim().parse::<i32>().ok())
        .ok_or_else(|| TranslateError::InvalidEffectCode {
            disruption_id: disruption_id.to_string(),
            value: effect.map(str::to_string),
        })
}

/// Maps one disruption to its feed entities: the alert first, then the
/// trip update if there is one.
///
/// Everything is validated before any entity is built, so a failing
/// disruption produces nothing.
pub fn map_disruption(disruption: &Disruption, agency_id: &str) -> TranslateResult<Vec<FeedEntity>> {
    let id = disruption
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(TranslateError::MissingDisruptionId)?;

    let effect = parse_effect(id, disruption.effect.as_deref())?;
    let targets = disruption
        .lines()
        .iter()
        .map(|line| LineTarget::from_line(id, line))
        .collect::<TranslateResult<Vec<_>>>()?;
    let validity = resolve_validity(id, disruption.validity.as_ref())?;

    let alert = FeedEntity {
        id: id.to_string(),
        is_deleted: Some(validity.is_deleted),
        alert: Some(Alert {
            active_period: vec![validity.active_period.clone()],
            informed_entity: targets.iter().map(|t| t.informed_entity(agency_id)).collect(),
            effect: Some(effect),
            description_text: translate_description(disruption.texts()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let mut entities = vec![alert];

    if effect == Effect::NoService as i32 {
        let trip = targets.iter().fold(
            TripDescriptor {
                schedule_relationship: Some(ScheduleRelationship::Canceled as i32),
                ..Default::default()
            },
            |trip, target| target.apply_to(trip),
        );

        entities.push(FeedEntity {
            id: format!("{TRIP_UPDATE_ID_PREFIX}{id}"),
            is_deleted: Some(validity.is_deleted),
            trip_update: Some(TripUpdate {
                trip,
                ..Default::default()
            }),
            ..Default::default()
        });
    }

    debug!(
        disruption_id = id,
        effect,
        lines = targets.len(),
        is_deleted = validity.is_deleted,
        entities = entities.len(),
        "Disruption translated"
    );

    Ok(entities)
}
