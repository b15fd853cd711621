//! Night train connection checker.
//!
//! Looks up the next connections between two stations on a date, prices
//! each of them for a party of travelers, and reports the offers found.

pub mod booking;
pub mod cache;
pub mod domain;
pub mod journey;
pub mod offers;
pub mod report;
pub mod session;
pub mod stations;
