//! Fare offers.

use std::fmt;

/// A priced product option for one connection and passenger composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    /// Product/fare name.
    pub name: String,
    /// Compartment types covered by the offer, in backend order.
    pub details: Vec<String>,
}

impl Offer {
    pub fn new(name: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            name: name.into(),
            details,
        }
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ({})", self.name, self.details.join(", "))
    }
}
