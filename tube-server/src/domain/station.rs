//! Station name and identifier types.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// Error returned when a station name is empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("station name must not be empty")]
pub struct EmptyStationName;

/// An opaque, stable identifier for a stop on the network (e.g. `940GZZLUHBT`).
///
/// Identifiers are non-empty and contain no whitespace. This type guarantees
/// that any `StationId` value is valid by construction.
///
/// # Examples
///
/// ```
/// use tube_server::domain::StationId;
///
/// let hbt = StationId::parse("940GZZLUHBT").unwrap();
/// assert_eq!(hbt.as_str(), "940GZZLUHBT");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("940 GZZ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStationId {
                reason: "must not contain whitespace",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A free-text station name as entered by the user.
///
/// Keeps the raw input (sent verbatim to the upstream search) alongside the
/// normalised lookup key: trimmed and lower-cased. Two names that differ only
/// in case or surrounding whitespace share a key.
///
/// # Examples
///
/// ```
/// use tube_server::domain::StationName;
///
/// let name = StationName::parse("  High Barnet  ").unwrap();
/// assert_eq!(name.key(), "high barnet");
/// assert_eq!(name.raw(), "  High Barnet  ");
///
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationName {
    raw: String,
    key: String,
}

impl StationName {
    /// Parse a station name, rejecting input that is empty once trimmed.
    pub fn parse(raw: &str) -> Result<Self, EmptyStationName> {
        let key = normalize(raw);
        if key.is_empty() {
            return Err(EmptyStationName);
        }

        Ok(Self {
            raw: raw.to_string(),
            key,
        })
    }

    /// The name exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalised cache / seed-table key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw.trim())
    }
}

/// Normalise a free-text station name into its lookup key.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
