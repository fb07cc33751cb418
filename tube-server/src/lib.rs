//! Tube journey planner server.
//!
//! A web service that answers: "what are my options from this station to
//! that one right now?" Station names are resolved to TfL stop identifiers,
//! route finding is delegated to the TfL journey planner, and the answer is
//! normalised into a small model the UI can render directly.

pub mod domain;
pub mod planner;
pub mod stations;
pub mod tfl;
pub mod web;
