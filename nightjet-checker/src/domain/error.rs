//! Domain error types.
//!
//! These errors represent data inconsistencies in the domain layer.
//! They are distinct from API/IO errors.

/// Domain-level errors for data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Connection has no train legs
    #[error("no trains to retrieve departure time from")]
    EmptyConnection,

    /// Offers were attached to a connection twice
    #[error("offers already attached to connection")]
    OffersAlreadyAttached,
}
