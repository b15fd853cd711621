//! Domain types for the night train checker.
//!
//! This module contains the validated model the booking pipeline works
//! with. Raw backend records are converted into these types at the edge,
//! so code that receives them can trust their shape.

mod connection;
mod error;
mod offer;
mod station;
mod train;
mod traveler;

pub use connection::Connection;
pub use error::DomainError;
pub use offer::Offer;
pub use station::{EvaNumber, InvalidEvaNumber, Station};
pub use train::Train;
pub use traveler::{Gender, InvalidTraveler, Traveler};
