//! Journey types.
//!
//! A `Journey` is one ranked option between two stations: its legs in
//! travel order, the disruptions affecting them, and whether it is the
//! recommended option.

use super::{ClockTime, Disruption, DomainError, JourneyLeg};

/// A complete journey option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    /// Total duration in minutes, as reported upstream.
    pub duration_mins: u32,
    pub departure: ClockTime,
    pub arrival: ClockTime,
    legs: Vec<JourneyLeg>,
    disruptions: Vec<Disruption>,
    /// Set on the first option in upstream order only.
    pub is_fastest: bool,
}

impl Journey {
    /// Creates a journey.
    ///
    /// Fails if `legs` is empty. An empty `disruptions` list is replaced by a
    /// single good-service entry, so the list is never empty.
    pub fn new(
        duration_mins: u32,
        departure: ClockTime,
        arrival: ClockTime,
        legs: Vec<JourneyLeg>,
        mut disruptions: Vec<Disruption>,
        is_fastest: bool,
    ) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyJourney);
        }

        if disruptions.is_empty() {
            disruptions.push(Disruption::good_service());
        }

        Ok(Self {
            duration_mins,
            departure,
            arrival,
            legs,
            disruptions,
            is_fastest,
        })
    }

    /// Legs in travel order. Never empty.
    pub fn legs(&self) -> &[JourneyLeg] {
        &self.legs
    }

    /// Disruptions in leg order. Never empty.
    pub fn disruptions(&self) -> &[Disruption] {
        &self.disruptions
    }

    /// Whether only the synthetic good-service entry is present.
    pub fn has_good_service(&self) -> bool {
        self.disruptions == [Disruption::good_service()]
    }
}
