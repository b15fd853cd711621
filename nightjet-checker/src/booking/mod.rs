//! Nightjet booking backend client.
//!
//! This module provides an HTTP client for the night train operator's
//! booking backend, which serves station search, connection listings and
//! per-connection offer pricing.
//!
//! Key characteristics of the backend:
//! - Every session starts with `POST /init/start`, which returns a token
//!   sent as the `X-Token` header on later calls
//! - Connection listings paginate by count (`skip=N`), not by cursor
//! - Offer documents are deeply nested and their shape varies by query,
//!   so they are returned as raw JSON for the offer extractor

mod api;
mod client;
mod convert;
mod error;
mod types;

pub use api::{AuthToken, BookingApi};
pub use client::{BookingClient, BookingConfig, DEFAULT_BASE_URL, DEFAULT_LANG};
pub use convert::{
    ConversionError, convert_connection, convert_meta_station, convert_station, convert_train,
    offer_request,
};
pub use error::BookingError;
pub use types::{
    ConnectionPage, ConnectionRecord, InitResponse, Numeric, OfferFilter, OfferRequest,
    PassengerObject, StationRecord, TimeRecord, TrainRecord,
};
