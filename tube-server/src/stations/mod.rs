//! Station name resolution.
//!
//! Maps free-text station names to TfL stop identifiers using a static
//! seed table, an injected in-memory cache and, as a last resort, the
//! TfL stop search.

mod cache;
mod error;
mod resolver;
mod seed;

pub use cache::StationCache;
pub use error::StationNotFound;
pub use resolver::{ResolverConfig, StationResolver, StopSearch, select_candidate};
pub use seed::{seed_lookup, seed_names};
