//! Connections between two stations.

use std::fmt;

use super::{DomainError, Offer, Station, Train};

/// One itinerary on a connection listing page.
///
/// `from_station` and `to_station` are the concrete endpoints named by the
/// listing, which may be members of a meta station the session resolved.
/// Offers are attached once, after the connection has been priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub from_station: Station,
    pub to_station: Station,
    pub trains: Vec<Train>,
    offers: Option<Vec<Offer>>,
}

impl Connection {
    pub fn new(from_station: Station, to_station: Station, trains: Vec<Train>) -> Self {
        Self {
            from_station,
            to_station,
            trains,
            offers: None,
        }
    }

    /// The first leg, which identifies the connection when pricing.
    pub fn get_departure_train(&self) -> Result<&Train, DomainError> {
        self.trains.first().ok_or(DomainError::EmptyConnection)
    }

    /// Attach priced offers.
    pub fn attach_offers(&mut self, offers: Vec<Offer>) -> Result<(), DomainError> {
        if self.offers.is_some() {
            return Err(DomainError::OffersAlreadyAttached);
        }
        self.offers = Some(offers);
        Ok(())
    }

    /// Consuming variant of [`attach_offers`](Self::attach_offers).
    pub fn with_offers(mut self, offers: Vec<Offer>) -> Result<Self, DomainError> {
        self.attach_offers(offers)?;
        Ok(self)
    }

    /// Attached offers, or `None` if the connection has not been priced.
    pub fn offers(&self) -> Option<&[Offer]> {
        self.offers.as_deref()
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: ", self.from_station, self.to_station)?;
        for (i, train) in self.trains.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{train}")?;
        }
        Ok(())
    }
}
