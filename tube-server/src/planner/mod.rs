//! Journey query orchestration.
//!
//! This module answers: "what are my options from this station to that
//! one?" It resolves both names, delegates route finding to the TfL
//! journey planner and normalises the answer for display.

mod config;
mod query;

pub use config::QueryConfig;
pub use query::{JourneyPlanner, JourneyQuery, QueryError};

#[cfg(test)]
mod query_tests;
