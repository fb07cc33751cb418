//! TfL Unified API boundary.
//!
//! This module provides the HTTP client for the Transport for London
//! Unified API, strict DTOs for the responses we consume, and the
//! conversion of journey records into the normalised domain model.
//!
//! Key characteristics of the API:
//! - `StopPoint/Search` returns candidates in relevance order; entrances and
//!   bus stops appear alongside the station itself
//! - `Journey/JourneyResults` returns options fastest first
//! - Timestamps are London wall-clock time without an offset

mod client;
mod convert;
mod error;
mod types;

pub use client::{TflClient, TflConfig};
pub use convert::{
    ConversionError, collect_disruptions, convert_leg, extract_direction, extract_line_name,
    format_clock, map_tfl_mode, transform_journey,
};
pub use error::TflError;
pub use types::{
    Identifier, ItineraryResult, LegDisruption, Path, Point, RouteOption, SearchMatch,
    SearchResponse, TflJourney, TflLeg,
};
