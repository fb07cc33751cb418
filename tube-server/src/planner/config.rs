//! Configuration for journey queries.

/// Configuration parameters for a journey query.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Maximum number of journeys to return. Upstream order is kept, so
    /// this keeps the first options only.
    pub max_journeys: usize,

    /// Modes the upstream planner may use.
    pub modes: Vec<String>,
}

impl QueryConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_journeys: usize, modes: &[&str]) -> Self {
        Self {
            max_journeys,
            modes: modes.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Set the maximum number of journeys.
    pub fn with_max_journeys(mut self, n: usize) -> Self {
        self.max_journeys = n;
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new(5, &["tube", "walking"])
    }
}
