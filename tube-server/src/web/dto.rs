//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Disruption, Journey, JourneyLeg};

/// Query parameters for a journey search.
#[derive(Debug, Deserialize)]
pub struct JourneysRequest {
    /// Origin station name (free text)
    pub from: Option<String>,

    /// Destination station name (free text)
    pub to: Option<String>,
}

/// Response for a journey search.
#[derive(Debug, Serialize)]
pub struct JourneysResponse {
    /// Journey options, recommended first
    pub journeys: Vec<JourneyResult>,
}

/// A journey option.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResult {
    /// Total duration in minutes
    pub duration: u32,

    /// Departure time (HH:MM)
    pub departure_time: String,

    /// Arrival time (HH:MM)
    pub arrival_time: String,

    /// Legs in travel order
    pub legs: Vec<LegResult>,

    /// Disruptions; a single info entry when service is good
    pub disruptions: Vec<DisruptionResult>,

    /// Whether this is the recommended option
    pub is_fastest: bool,
}

/// A leg of a journey.
///
/// Tube legs carry `lineName`, `direction` and `stops`; walking legs carry
/// `distance`. Absent fields are omitted from the JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    /// "tube" or "walking"
    pub mode: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    pub from: String,

    pub to: String,

    /// Duration in minutes
    pub duration: u32,

    /// Number of stops (tube only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<u32>,

    /// Distance in metres (walking only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
}

/// A disruption notice.
#[derive(Debug, Serialize)]
pub struct DisruptionResult {
    /// "info", "warning" or "severe"
    pub severity: &'static str,

    pub message: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,

    /// Machine-readable category
    pub kind: &'static str,
}

// Conversion implementations

impl JourneyResult {
    /// Create from a domain Journey.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            duration: journey.duration_mins,
            departure_time: journey.departure.to_string(),
            arrival_time: journey.arrival.to_string(),
            legs: journey.legs().iter().map(LegResult::from_leg).collect(),
            disruptions: journey
                .disruptions()
                .iter()
                .map(DisruptionResult::from_disruption)
                .collect(),
            is_fastest: journey.is_fastest,
        }
    }
}

impl LegResult {
    /// Create from a domain JourneyLeg.
    pub fn from_leg(leg: &JourneyLeg) -> Self {
        Self {
            mode: leg.mode().as_str(),
            line_name: leg.line_name().map(str::to_string),
            direction: leg.direction().map(str::to_string),
            from: leg.from.clone(),
            to: leg.to.clone(),
            duration: leg.duration_mins,
            stops: leg.stops(),
            distance: leg.distance_m(),
        }
    }
}

impl DisruptionResult {
    /// Create from a domain Disruption.
    pub fn from_disruption(disruption: &Disruption) -> Self {
        Self {
            severity: disruption.severity.as_str(),
            message: disruption.message.clone(),
        }
    }
}
