//! Conversion from TfL DTOs to domain types.
//!
//! Turns one upstream journey record into the normalised [`Journey`]:
//! mode mapping, line and direction extraction, per-leg defaults,
//! disruption collection and clock formatting. Pure functions only.

use crate::domain::{
    ClockTime, Disruption, DomainError, Journey, JourneyLeg, LegMode, TimeError, round_distance,
};

use super::types::{TflJourney, TflLeg};

const TUBE_MODE_ID: &str = "tube";
const WALKING_MODE_ID: &str = "walking";

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a timestamp
    #[error("invalid {field}: {source}")]
    InvalidTime {
        field: &'static str,
        #[source]
        source: TimeError,
    },

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Result violates a domain invariant
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Map a TfL mode id onto the two classes the UI shows.
pub fn map_tfl_mode(mode_id: &str) -> LegMode {
    LegMode::from_tfl(mode_id)
}

/// Line name for a leg TfL tagged `tube`.
///
/// Prefers the first route option's name, then the mode's display name.
/// Legs of any other mode never have one, even those shown as tube.
pub fn extract_line_name(leg: &TflLeg) -> Option<String> {
    if !leg.has_mode_id(TUBE_MODE_ID) {
        return None;
    }

    let route_name = leg
        .route_options
        .first()
        .and_then(|r| r.name.as_deref())
        .filter(|n| !n.is_empty());
    let mode_name = leg
        .mode
        .as_ref()
        .and_then(|m| m.name.as_deref())
        .filter(|n| !n.is_empty());

    route_name.or(mode_name).map(str::to_string)
}

/// Direction for a leg TfL tagged `tube`: the first direction of the first
/// route option.
pub fn extract_direction(leg: &TflLeg) -> Option<String> {
    if !leg.has_mode_id(TUBE_MODE_ID) {
        return None;
    }

    leg.route_options
        .first()
        .and_then(|r| r.directions.first())
        .filter(|d| !d.is_empty())
        .cloned()
}

/// Convert a single leg. Never fails; missing fields take defaults.
///
/// The shown mode comes from [`map_tfl_mode`], but stops and distance are
/// only filled in when TfL tagged the leg `tube` or `walking` exactly.
pub fn convert_leg(leg: &TflLeg) -> JourneyLeg {
    let from = leg
        .departure_point
        .as_ref()
        .and_then(|p| p.common_name.clone())
        .unwrap_or_default();
    let to = leg
        .arrival_point
        .as_ref()
        .and_then(|p| p.common_name.clone())
        .unwrap_or_default();
    let duration = leg.duration.unwrap_or(0);

    match map_tfl_mode(leg.mode_id()) {
        LegMode::Walking => {
            let distance = leg
                .has_mode_id(WALKING_MODE_ID)
                .then(|| round_distance(leg.distance.unwrap_or(0.0)));
            JourneyLeg::walking(from, to, duration, distance)
        }
        LegMode::Tube => {
            let stops = leg.has_mode_id(TUBE_MODE_ID).then(|| {
                let count = leg.path.as_ref().map_or(0, |p| p.stop_points.len());
                u32::try_from(count).unwrap_or(u32::MAX)
            });
            JourneyLeg::tube(
                from,
                to,
                duration,
                extract_line_name(leg),
                extract_direction(leg),
                stops,
            )
        }
    }
}

/// Collect every leg-level disruption, in leg order, as a warning.
///
/// Returns an empty list when nothing was reported; [`Journey::new`] then
/// supplies the good-service entry.
pub fn collect_disruptions(legs: &[TflLeg]) -> Vec<Disruption> {
    legs.iter()
        .flat_map(|leg| leg.disruptions.iter())
        .map(|d| Disruption::from_leg_description(d.description.as_deref()))
        .collect()
}

/// Parse a TfL timestamp into a local `HH:MM` clock time.
pub fn format_clock(timestamp: &str) -> Result<ClockTime, TimeError> {
    ClockTime::parse_tfl(timestamp)
}

/// Convert one upstream journey.
///
/// `index` is the journey's position in upstream order; position 0 is
/// flagged as fastest. Durations are not compared.
pub fn transform_journey(journey: &TflJourney, index: usize) -> Result<Journey, ConversionError> {
    let tfl_legs = journey
        .legs
        .as_deref()
        .ok_or(ConversionError::MissingField("legs"))?;

    let departure = parse_timestamp(journey.start_date_time.as_deref(), "startDateTime")?;
    let arrival = parse_timestamp(journey.arrival_date_time.as_deref(), "arrivalDateTime")?;

    let legs: Vec<JourneyLeg> = tfl_legs.iter().map(convert_leg).collect();
    let disruptions = collect_disruptions(tfl_legs);

    let journey = Journey::new(
        journey.duration.unwrap_or(0),
        departure,
        arrival,
        legs,
        disruptions,
        index == 0,
    )?;

    Ok(journey)
}

fn parse_timestamp(value: Option<&str>, field: &'static str) -> Result<ClockTime, ConversionError> {
    let value = value.ok_or(ConversionError::MissingField(field))?;
    format_clock(value).map_err(|source| ConversionError::InvalidTime { field, source })
}
