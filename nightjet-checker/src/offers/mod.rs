//! Offer extraction.
//!
//! Offer documents nest offers at varying depths depending on the query.
//! A small path matcher locates them (`$..offers[*]`) and their German
//! compartment names (`$..compartments[*].name.de`).

mod extract;
mod path;

pub use extract::{OfferError, OfferExtractor, extract_offers};
pub use path::{JsonPath, PathError, Step};
