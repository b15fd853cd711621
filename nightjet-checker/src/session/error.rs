//! Session error types.

use crate::booking::{BookingError, ConversionError};
use crate::domain::DomainError;
use crate::offers::OfferError;
use crate::stations::StationError;

/// Errors that abort a session operation.
///
/// Nothing is retried; the first failure ends the enclosing call.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A request to the booking backend failed
    #[error("remote request failed: {0}")]
    Remote(#[from] BookingError),

    /// A station name did not resolve to exactly one station
    #[error(transparent)]
    Station(#[from] StationError),

    /// A connection record could not be converted
    #[error("invalid connection record: {0}")]
    Conversion(#[from] ConversionError),

    /// Connection data was inconsistent
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// An offer document broke the expected shape
    #[error("invalid offer document: {0}")]
    Offer(#[from] OfferError),
}
