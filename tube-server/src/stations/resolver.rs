//! Station name resolution.
//!
//! Maps free-text names to stable stop identifiers: seed table first, then
//! the injected cache, then a remote stop search. Any resolved name is
//! searched for at most once per cache lifetime.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::domain::{StationId, StationName};
use crate::tfl::{SearchMatch, SearchResponse, TflError};

use super::cache::StationCache;
use super::error::StationNotFound;
use super::seed::seed_lookup;

/// Trait for searching upstream stops by free text.
///
/// This abstraction allows the resolver to be tested with mock data.
pub trait StopSearch: Send + Sync {
    /// Search for stops served by `mode`, returning at most `max_results`
    /// candidates in relevance order.
    fn search_stops(
        &self,
        query: &str,
        mode: &str,
        max_results: u8,
    ) -> impl Future<Output = Result<SearchResponse, TflError>> + Send;
}

/// Configuration for remote station search.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Mode candidates must be served by.
    pub mode: String,

    /// Maximum number of candidates to request.
    pub max_candidates: u8,

    /// Stop type marking the station itself rather than an entrance or
    /// platform.
    pub preferred_stop_type: String,
}

impl ResolverConfig {
    /// Set the mode candidates must be served by.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set the maximum number of candidates to request.
    pub fn with_max_candidates(mut self, n: u8) -> Self {
        self.max_candidates = n;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mode: "tube".to_string(),
            max_candidates: 5,
            preferred_stop_type: "NaptanMetroStation".to_string(),
        }
    }
}

/// Resolves station names to identifiers.
pub struct StationResolver<S> {
    search: S,
    cache: StationCache,
    config: ResolverConfig,
}

impl<S: StopSearch> StationResolver<S> {
    /// Create a resolver with the default configuration.
    pub fn new(search: S, cache: StationCache) -> Self {
        Self::with_config(search, cache, ResolverConfig::default())
    }

    /// Create a resolver with a custom configuration.
    pub fn with_config(search: S, cache: StationCache, config: ResolverConfig) -> Self {
        Self {
            search,
            cache,
            config,
        }
    }

    /// The cache this resolver reads and fills.
    pub fn cache(&self) -> &StationCache {
        &self.cache
    }

    /// Resolve a station name to its identifier.
    ///
    /// Never fails with anything but [`StationNotFound`]: search transport
    /// and parse errors are logged and reported as not found. Nothing is
    /// cached on failure.
    pub async fn resolve(&self, name: &StationName) -> Result<StationId, StationNotFound> {
        let key = name.key();

        if let Some(id) = seed_lookup(key) {
            debug!(station = %name, id = %id, "Resolved from seed table");
            self.cache.insert(key, id.clone()).await;
            return Ok(id);
        }

        if let Some(id) = self.cache.get(key).await {
            debug!(station = %name, id = %id, "Resolved from cache");
            return Ok(id);
        }

        let Some(id) = self.search_remote(name).await else {
            return Err(StationNotFound::new(name.to_string()));
        };

        info!(station = %name, id = %id, "Resolved via stop search");
        self.cache.insert(key, id.clone()).await;
        Ok(id)
    }

    async fn search_remote(&self, name: &StationName) -> Option<StationId> {
        debug!(station = %name, mode = %self.config.mode, "Searching for station");

        let response = match self
            .search
            .search_stops(name.raw(), &self.config.mode, self.config.max_candidates)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(station = %name, error = %e, "Stop search failed");
                return None;
            }
        };

        let selected = select_candidate(&response.matches, &self.config);
        if selected.is_none() {
            info!(
                station = %name,
                candidates = response.matches.len(),
                "No matching stations"
            );
        }
        selected
    }
}

/// Pick the best candidate from search results.
///
/// Keeps candidates served by the configured mode that carry a usable
/// identifier, preserving upstream order. Prefers the first canonical
/// station entity, otherwise takes the first remaining candidate. Every
/// returned match is considered, even if upstream sent more than asked for.
pub fn select_candidate(matches: &[SearchMatch], config: &ResolverConfig) -> Option<StationId> {
    let usable: Vec<(&SearchMatch, StationId)> = matches
        .iter()
        .filter(|m| m.serves(&config.mode))
        .filter_map(|m| {
            let id = StationId::parse(m.identifier()?).ok()?;
            Some((m, id))
        })
        .collect();

    let preferred = usable
        .iter()
        .position(|(m, _)| m.stop_type.as_deref() == Some(config.preferred_stop_type.as_str()))
        .unwrap_or(0);

    usable.into_iter().nth(preferred).map(|(_, id)| id)
}
