//! TfL Unified API response DTOs.
//!
//! These types map directly to the JSON returned by `StopPoint/Search` and
//! `Journey/JourneyResults`. They use `Option` and `#[serde(default)]`
//! liberally because TfL omits fields rather than sending nulls; defaulting
//! to domain values happens once, in `convert`.

use serde::Deserialize;

/// Response from `StopPoint/Search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Echo of the search query.
    pub query: Option<String>,

    /// Total number of matches upstream (may exceed `matches.len()`).
    pub total: Option<u32>,

    /// Candidate stops, most relevant first.
    #[serde(default)]
    pub matches: Vec<SearchMatch>,
}

/// A candidate stop from `StopPoint/Search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    /// Generic NaPTAN identifier (e.g. "940GZZLUBNK").
    pub id: Option<String>,

    /// Dedicated ICS code used by the journey planner.
    pub ics_code: Option<String>,

    /// Display name.
    pub name: Option<String>,

    /// Transport modes serving this stop.
    #[serde(default)]
    pub modes: Vec<String>,

    /// NaPTAN stop type (e.g. "NaptanMetroStation", "NaptanMetroEntrance").
    pub stop_type: Option<String>,

    /// Latitude.
    pub lat: Option<f64>,

    /// Longitude.
    pub lon: Option<f64>,
}

impl SearchMatch {
    /// The identifier to resolve to: the ICS code when present, else the id.
    pub fn identifier(&self) -> Option<&str> {
        non_empty(self.ics_code.as_deref()).or_else(|| non_empty(self.id.as_deref()))
    }

    /// Whether this stop is served by `mode`.
    pub fn serves(&self, mode: &str) -> bool {
        self.modes.iter().any(|m| m == mode)
    }
}

/// Response from `Journey/JourneyResults`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResult {
    /// Journey options in upstream order (fastest first).
    #[serde(default)]
    pub journeys: Vec<TflJourney>,
}

/// One journey option from the planner.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TflJourney {
    /// Departure timestamp (ISO 8601, usually without offset).
    pub start_date_time: Option<String>,

    /// Arrival timestamp.
    pub arrival_date_time: Option<String>,

    /// Total duration in minutes.
    pub duration: Option<u32>,

    /// Legs in travel order. Absent only in malformed records.
    pub legs: Option<Vec<TflLeg>>,
}

/// A single leg of a journey.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TflLeg {
    /// Duration in minutes.
    pub duration: Option<u32>,

    /// Mode of travel for this leg.
    pub mode: Option<Identifier>,

    /// Lines that could serve this leg; the first is the suggested one.
    #[serde(default)]
    pub route_options: Vec<RouteOption>,

    /// Where the leg starts.
    pub departure_point: Option<Point>,

    /// Where the leg ends.
    pub arrival_point: Option<Point>,

    /// Stops along the way (tube legs).
    pub path: Option<Path>,

    /// Distance in metres (walking legs). TfL sends fractional values.
    pub distance: Option<f64>,

    /// Disruptions affecting this leg.
    #[serde(default)]
    pub disruptions: Vec<LegDisruption>,

    /// Whether any disruption on this leg is considered serious upstream.
    pub is_disrupted: Option<bool>,
}

impl TflLeg {
    /// The mode id, treating a missing or empty id as walking.
    pub fn mode_id(&self) -> &str {
        self.mode
            .as_ref()
            .and_then(|m| non_empty(m.id.as_deref()))
            .unwrap_or("walking")
    }

    /// Whether TfL tagged this leg with exactly `id`.
    ///
    /// Unlike [`mode_id`](Self::mode_id) there is no walking default: a leg
    /// with no mode id is neither tube nor walking here.
    pub fn has_mode_id(&self, id: &str) -> bool {
        self.mode.as_ref().and_then(|m| m.id.as_deref()) == Some(id)
    }
}

/// A named TfL entity reference (used for modes).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    /// Machine id (e.g. "tube", "walking", "bus").
    pub id: Option<String>,

    /// Display name (e.g. "Northern").
    pub name: Option<String>,
}

/// A line option for a leg.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    /// Line name (e.g. "Northern").
    pub name: Option<String>,

    /// Direction descriptions (e.g. "Morden via Bank").
    #[serde(default)]
    pub directions: Vec<String>,
}

/// A departure or arrival point.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    /// Human-readable stop name.
    pub common_name: Option<String>,

    /// NaPTAN id of the point, when it is a stop.
    pub naptan_id: Option<String>,
}

/// The path of a leg.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    /// Stops visited along the leg.
    #[serde(default)]
    pub stop_points: Vec<Identifier>,
}

/// A disruption attached to a leg.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDisruption {
    /// Upstream category (e.g. "RealTime", "PlannedWork").
    pub category: Option<String>,

    /// Free-text description shown to passengers.
    pub description: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
