//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from API/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Journey has no legs
    #[error("journey must have at least one leg")]
    EmptyJourney,
}
