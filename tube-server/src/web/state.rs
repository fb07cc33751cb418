//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::JourneyQuery;
use crate::tfl::TflClient;

/// The journey query as wired for production: TfL for both capabilities.
pub type TflJourneyQuery = JourneyQuery<TflClient, TflClient>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Journey query orchestrator (owns the station cache)
    pub journeys: Arc<TflJourneyQuery>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(journeys: TflJourneyQuery) -> Self {
        Self {
            journeys: Arc::new(journeys),
        }
    }
}
