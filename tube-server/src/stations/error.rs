//! Station resolution error types.

/// A station name could not be resolved to an identifier.
///
/// Covers both "no such station" and a failed upstream search; callers
/// cannot tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("station not found: {name}")]
pub struct StationNotFound {
    /// The name as entered, trimmed.
    pub name: String,
}

impl StationNotFound {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
