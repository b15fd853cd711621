//! Station resolution.
//!
//! Turns the candidates of a free-text station search into exactly one
//! station, preferring a unique meta (area) station over specific ones.

mod error;
mod resolve;

pub use error::{Ambiguity, StationError};
pub use resolve::resolve;
