//! In-memory cache of resolved station names.

use moka::future::Cache as MokaCache;

use crate::domain::StationId;

/// Normalised station name → resolved identifier.
///
/// Entries never expire and are never evicted: once a name resolves, the
/// mapping is fixed for the life of the cache. Clones share the same
/// underlying storage, and concurrent reads and inserts are safe, so one
/// instance can be handed to every request worker.
#[derive(Clone)]
pub struct StationCache {
    entries: MokaCache<String, StationId>,
}

impl StationCache {
    /// Create an empty, unbounded cache.
    pub fn new() -> Self {
        Self {
            entries: MokaCache::builder().build(),
        }
    }

    /// Look up a normalised name.
    pub async fn get(&self, key: &str) -> Option<StationId> {
        self.entries.get(key).await
    }

    /// Record a resolution. A later insert for the same key replaces the
    /// earlier one; both come from the same lookup so the value is unchanged.
    pub async fn insert(&self, key: impl Into<String>, id: StationId) {
        self.entries.insert(key.into(), id).await;
    }

    /// Whether a normalised name has been resolved.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Forget every resolution. Intended for tests.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}

impl Default for StationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StationCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
