//! Disruption and severity types.

use std::fmt;

/// Message attached to the synthetic entry for a journey with no disruptions.
pub const GOOD_SERVICE_MESSAGE: &str = "Good service on all lines";

/// Message used when an upstream disruption has no description.
pub const FALLBACK_DISRUPTION_MESSAGE: &str = "Service disruption";

/// How serious a reported disruption is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Severe,
}

impl Severity {
    /// Classify a TfL line-status severity code.
    ///
    /// TfL codes run from 0 (special service) to 20 (service closed) with
    /// 10 meaning "Good Service". Codes of 10 and above are informational,
    /// 6 to 9 are warnings and anything lower is severe.
    ///
    /// # Examples
    ///
    /// ```
    /// use tube_server::domain::Severity;
    ///
    /// assert_eq!(Severity::from_status_severity(10), Severity::Info);
    /// assert_eq!(Severity::from_status_severity(9), Severity::Warning);
    /// assert_eq!(Severity::from_status_severity(5), Severity::Severe);
    /// ```
    pub fn from_status_severity(code: i32) -> Self {
        match code {
            10.. => Severity::Info,
            6..=9 => Severity::Warning,
            _ => Severity::Severe,
        }
    }

    /// Lower-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a numeric service-status severity. See [`Severity::from_status_severity`].
pub fn classify_severity(code: i32) -> Severity {
    Severity::from_status_severity(code)
}

/// A service irregularity shown alongside a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disruption {
    pub severity: Severity,
    pub message: String,
}

impl Disruption {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// A leg-level disruption reported upstream.
    ///
    /// Always a warning; the upstream severity is not consulted. Missing or
    /// empty descriptions get a generic message; others are kept verbatim.
    pub fn from_leg_description(description: Option<&str>) -> Self {
        let message = description
            .filter(|d| !d.is_empty())
            .unwrap_or(FALLBACK_DISRUPTION_MESSAGE);
        Self::new(Severity::Warning, message)
    }

    /// The entry used when nothing was reported.
    pub fn good_service() -> Self {
        Self::new(Severity::Info, GOOD_SERVICE_MESSAGE)
    }
}
