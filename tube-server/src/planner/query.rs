//! Journey query orchestration.
//!
//! Given two station names: resolve both, ask the upstream planner for
//! journeys between them, and normalise the first few results. Every
//! request ends in either the full journey list or a single error.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::domain::{Journey, StationId, StationName};
use crate::stations::{StationResolver, StopSearch};
use crate::tfl::{ItineraryResult, TflError, transform_journey};

use super::config::QueryConfig;

/// Message for a request missing one or both station names.
const MISSING_NAMES_MESSAGE: &str = "Both 'from' and 'to' parameters are required";

/// Errors from a journey query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Missing or blank station names. No network calls were made.
    #[error("{0}")]
    InvalidInput(String),

    /// One or both names could not be resolved. The planner was not called.
    #[error("could not find station(s): {}", .unresolved.join(", "))]
    StationNotFound { unresolved: Vec<String> },

    /// The journey planner failed or returned a non-success status.
    #[error("journey planner unavailable: {0}")]
    UpstreamUnavailable(#[source] TflError),

    /// Unexpected failure, e.g. a malformed upstream record.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Trait for planning journeys between resolved stops.
///
/// This abstraction allows the orchestrator to be tested with mock data.
pub trait JourneyPlanner: Send + Sync {
    /// Plan journeys from `from` to `to` using only `modes`.
    ///
    /// Journeys are returned in upstream order, fastest first.
    fn plan(
        &self,
        from: &StationId,
        to: &StationId,
        modes: &[String],
    ) -> impl Future<Output = Result<ItineraryResult, TflError>> + Send;
}

/// Answers "how do I get from A to B?" for free-text station names.
pub struct JourneyQuery<S, P> {
    resolver: StationResolver<S>,
    planner: P,
    config: QueryConfig,
}

impl<S: StopSearch, P: JourneyPlanner> JourneyQuery<S, P> {
    /// Create a new query orchestrator.
    pub fn new(resolver: StationResolver<S>, planner: P, config: QueryConfig) -> Self {
        Self {
            resolver,
            planner,
            config,
        }
    }

    /// The resolver used for station names.
    pub fn resolver(&self) -> &StationResolver<S> {
        &self.resolver
    }

    /// Query journeys between two free-text station names.
    ///
    /// Returns at most `max_journeys` journeys in upstream order, the first
    /// flagged as fastest. An upstream answer with no journeys is an empty
    /// list, not an error. Failures are not retried.
    pub async fn query_journeys(&self, from: &str, to: &str) -> Result<Vec<Journey>, QueryError> {
        let (Ok(from), Ok(to)) = (StationName::parse(from), StationName::parse(to)) else {
            return Err(QueryError::InvalidInput(MISSING_NAMES_MESSAGE.to_string()));
        };

        info!(from = %from, to = %to, "Fetching journeys");

        let (from_id, to_id) = self.resolve_pair(&from, &to).await?;

        debug!(from = %from_id, to = %to_id, "Calling journey planner");

        let result = self
            .planner
            .plan(&from_id, &to_id, &self.config.modes)
            .await
            .map_err(|e| {
                warn!(from = %from_id, to = %to_id, error = %e, "Journey planner failed");
                match e {
                    TflError::Json { message, .. } => {
                        QueryError::Internal(format!("malformed journey response: {message}"))
                    }
                    other => QueryError::UpstreamUnavailable(other),
                }
            })?;

        if result.journeys.is_empty() {
            info!(from = %from_id, to = %to_id, "No journeys found");
            return Ok(Vec::new());
        }

        let journeys = result
            .journeys
            .iter()
            .take(self.config.max_journeys)
            .enumerate()
            .map(|(index, journey)| transform_journey(journey, index))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                warn!(error = %e, "Failed to convert journey");
                QueryError::Internal(e.to_string())
            })?;

        info!(
            journeys = journeys.len(),
            upstream = result.journeys.len(),
            "Fetched journeys"
        );

        Ok(journeys)
    }

    /// Resolve both names concurrently. Fails if either side fails.
    async fn resolve_pair(
        &self,
        from: &StationName,
        to: &StationName,
    ) -> Result<(StationId, StationId), QueryError> {
        let (from_id, to_id) = tokio::join!(self.resolver.resolve(from), self.resolver.resolve(to));

        match (from_id, to_id) {
            (Ok(from_id), Ok(to_id)) => Ok((from_id, to_id)),
            (from_id, to_id) => {
                let unresolved: Vec<String> = [from_id.err(), to_id.err()]
                    .into_iter()
                    .flatten()
                    .map(|e| e.name)
                    .collect();
                warn!(unresolved = ?unresolved, "Failed to resolve stations");
                Err(QueryError::StationNotFound { unresolved })
            }
        }
    }
}
