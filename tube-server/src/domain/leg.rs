//! Journey leg types.
//!
//! A `JourneyLeg` is one uninterrupted segment of a journey, either on the
//! Underground or on foot. Mode-specific fields live on [`LegKind`], so a
//! walking leg cannot carry a line name and a tube leg cannot carry a
//! distance. Within a kind every field is optional: a leg TfL tagged with
//! some other mode is shown as tube but has no line, direction or stops.

use std::fmt;

/// The two classes of travel the UI distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegMode {
    Tube,
    Walking,
}

impl LegMode {
    /// Map a TfL mode identifier.
    ///
    /// Only `"walking"` is walking; every other identifier, including
    /// unknown ones and the empty string, is treated as tube.
    ///
    /// # Examples
    ///
    /// ```
    /// use tube_server::domain::LegMode;
    ///
    /// assert_eq!(LegMode::from_tfl("walking"), LegMode::Walking);
    /// assert_eq!(LegMode::from_tfl("tube"), LegMode::Tube);
    /// assert_eq!(LegMode::from_tfl("bus"), LegMode::Tube);
    /// ```
    pub fn from_tfl(mode_id: &str) -> Self {
        if mode_id == "walking" {
            LegMode::Walking
        } else {
            LegMode::Tube
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LegMode::Tube => "tube",
            LegMode::Walking => "walking",
        }
    }
}

impl fmt::Display for LegMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode-specific leg details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegKind {
    /// A ride on an Underground line.
    Tube {
        line_name: Option<String>,
        direction: Option<String>,
        /// Number of stop points along the ride's path.
        stops: Option<u32>,
    },
    /// A walk.
    Walking {
        /// Distance in whole metres.
        distance_m: Option<u32>,
    },
}

/// One segment of a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyLeg {
    pub kind: LegKind,
    /// Departure point name (may be empty).
    pub from: String,
    /// Arrival point name (may be empty).
    pub to: String,
    pub duration_mins: u32,
}

impl JourneyLeg {
    /// Creates a tube leg.
    pub fn tube(
        from: impl Into<String>,
        to: impl Into<String>,
        duration_mins: u32,
        line_name: Option<String>,
        direction: Option<String>,
        stops: Option<u32>,
    ) -> Self {
        Self {
            kind: LegKind::Tube {
                line_name,
                direction,
                stops,
            },
            from: from.into(),
            to: to.into(),
            duration_mins,
        }
    }

    /// Creates a walking leg.
    pub fn walking(
        from: impl Into<String>,
        to: impl Into<String>,
        duration_mins: u32,
        distance_m: Option<u32>,
    ) -> Self {
        Self {
            kind: LegKind::Walking { distance_m },
            from: from.into(),
            to: to.into(),
            duration_mins,
        }
    }

    pub fn mode(&self) -> LegMode {
        match self.kind {
            LegKind::Tube { .. } => LegMode::Tube,
            LegKind::Walking { .. } => LegMode::Walking,
        }
    }

    pub fn line_name(&self) -> Option<&str> {
        match &self.kind {
            LegKind::Tube { line_name, .. } => line_name.as_deref(),
            LegKind::Walking { .. } => None,
        }
    }

    pub fn direction(&self) -> Option<&str> {
        match &self.kind {
            LegKind::Tube { direction, .. } => direction.as_deref(),
            LegKind::Walking { .. } => None,
        }
    }

    pub fn stops(&self) -> Option<u32> {
        match self.kind {
            LegKind::Tube { stops, .. } => stops,
            LegKind::Walking { .. } => None,
        }
    }

    pub fn distance_m(&self) -> Option<u32> {
        match self.kind {
            LegKind::Tube { .. } => None,
            LegKind::Walking { distance_m } => distance_m,
        }
    }
}

/// Round a distance in metres to the nearest whole metre.
///
/// Negative and non-finite inputs become 0.
pub fn round_distance(metres: f64) -> u32 {
    if !metres.is_finite() || metres <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX
    metres.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_walking() {
        assert_eq!(LegMode::from_tfl("walking"), LegMode::Walking);
    }

    #[test]
    fn map_everything_else_to_tube() {
        for id in ["tube", "bus", "rail", "dlr", "elizabeth-line", "", "Walking", " walking"] {
            assert_eq!(LegMode::from_tfl(id), LegMode::Tube, "mode id {id:?}");
        }
    }

    #[test]
    fn tube_leg_accessors() {
        let leg = JourneyLeg::tube(
            "High Barnet",
            "Tottenham Court Road",
            25,
            Some("Northern".into()),
            Some("Morden via Bank".into()),
            Some(10),
        );
        assert_eq!(leg.mode(), LegMode::Tube);
        assert_eq!(leg.line_name(), Some("Northern"));
        assert_eq!(leg.direction(), Some("Morden via Bank"));
        assert_eq!(leg.stops(), Some(10));
        assert_eq!(leg.distance_m(), None);
    }

    #[test]
    fn walking_leg_accessors() {
        let leg = JourneyLeg::walking("Tottenham Court Road", "Chancery Lane", 5, Some(400));
        assert_eq!(leg.mode(), LegMode::Walking);
        assert_eq!(leg.line_name(), None);
        assert_eq!(leg.direction(), None);
        assert_eq!(leg.stops(), None);
        assert_eq!(leg.distance_m(), Some(400));
    }

    #[test]
    fn optional_fields_stay_within_kind() {
        let tube = JourneyLeg::tube("A", "B", 4, None, None, None);
        assert_eq!(tube.mode(), LegMode::Tube);
        assert_eq!(tube.stops(), None);
        assert_eq!(tube.distance_m(), None);

        let walk = JourneyLeg::walking("A", "B", 4, None);
        assert_eq!(walk.mode(), LegMode::Walking);
        assert_eq!(walk.distance_m(), None);
        assert_eq!(walk.stops(), None);
    }

    #[test]
    fn distance_rounding() {
        assert_eq!(round_distance(399.6), 400);
        assert_eq!(round_distance(400.4), 400);
        assert_eq!(round_distance(0.5), 1);
        assert_eq!(round_distance(0.0), 0);
        assert_eq!(round_distance(-12.0), 0);
        assert_eq!(round_distance(f64::NAN), 0);
    }

    #[test]
    fn mode_names() {
        assert_eq!(LegMode::Tube.to_string(), "tube");
        assert_eq!(LegMode::Walking.to_string(), "walking");
    }
}
