//! Domain types for the tube journey planner.
//!
//! This module contains the normalised journey model handed to the UI and
//! the station types used to resolve free-text names. All types enforce
//! their invariants at construction time, so code that receives these types
//! can trust their validity.

mod disruption;
mod error;
mod journey;
mod leg;
mod station;
mod time;

pub use disruption::{
    Disruption, FALLBACK_DISRUPTION_MESSAGE, GOOD_SERVICE_MESSAGE, Severity, classify_severity,
};
pub use error::DomainError;
pub use journey::Journey;
pub use leg::{JourneyLeg, LegKind, LegMode, round_distance};
pub use station::{EmptyStationName, InvalidStationId, StationId, StationName, normalize};
pub use time::{ClockTime, TimeError};
