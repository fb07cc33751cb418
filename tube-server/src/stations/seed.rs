//! Static seed table of well-known stations.
//!
//! Checked before the cache or any network access, so the default route
//! resolves deterministically without TfL.

use crate::domain::StationId;

/// Normalised station name → identifier.
const SEED_STATIONS: &[(&str, &str)] = &[
    ("high barnet", "940GZZLUHBT"),
    ("chancery lane", "940GZZLUCHL"),
    ("kings cross", "940GZZLUKSX"),
    ("leicester square", "940GZZLULCS"),
    ("oxford circus", "940GZZLUOXC"),
];

/// Look up a normalised name in the seed table.
pub fn seed_lookup(key: &str) -> Option<StationId> {
    SEED_STATIONS
        .iter()
        .find(|(name, _)| *name == key)
        .and_then(|(_, id)| StationId::parse(id).ok())
}

/// All seeded names, in table order.
pub fn seed_names() -> impl Iterator<Item = &'static str> {
    SEED_STATIONS.iter().map(|(name, _)| *name)
}
