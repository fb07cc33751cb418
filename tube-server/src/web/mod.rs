//! Web layer for the tube journey planner.
//!
//! Provides the HTTP endpoint the UI polls for journey options.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, TflJourneyQuery};
