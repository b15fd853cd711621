//! The booking backend interface the session pipeline depends on.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::EvaNumber;

use super::error::BookingError;
use super::types::{ConnectionPage, OfferRequest, StationRecord};

/// Session token handed out by `POST /init/start`.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Validate a raw token.
    ///
    /// The token travels as an HTTP header, so it must be non-empty
    /// visible ASCII.
    pub fn parse(raw: &str) -> Result<Self, BookingError> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(BookingError::MissingToken);
        }
        Ok(AuthToken(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// Operations against the booking backend.
///
/// This abstraction allows the session pipeline to be tested with mock
/// data. Every call is awaited to completion before the next is issued.
#[allow(async_fn_in_trait)]
pub trait BookingApi {
    /// Start a backend session and return its token.
    async fn start_session(&self) -> Result<AuthToken, BookingError>;

    /// Search stations by free-text name.
    async fn find_stations(
        &self,
        token: &AuthToken,
        name: &str,
    ) -> Result<Vec<StationRecord>, BookingError>;

    /// Fetch one page of connections, skipping the first `skip` results.
    async fn get_connections(
        &self,
        token: &AuthToken,
        from: EvaNumber,
        to: EvaNumber,
        date: NaiveDate,
        skip: usize,
    ) -> Result<ConnectionPage, BookingError>;

    /// Price one connection. Returns the raw offer document.
    async fn get_offers(
        &self,
        token: &AuthToken,
        request: &OfferRequest,
    ) -> Result<serde_json::Value, BookingError>;
}
