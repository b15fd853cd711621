//! Booking sessions.
//!
//! A [`Session`] owns one backend token and one resolved station pair. It
//! pages through the connection listing for a date and prices every
//! connection it keeps, one request at a time.

mod error;

use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::booking::{AuthToken, BookingApi, convert_connection, offer_request};
use crate::domain::{Connection, Station, Traveler};
use crate::offers::OfferExtractor;
use crate::stations;

pub use error::SessionError;

/// Which way a session's station pair is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From station to to station.
    Outward,
    /// To station back to from station.
    Return,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Outward => f.write_str("outward"),
            Direction::Return => f.write_str("return"),
        }
    }
}

/// Authenticated context for one station pair.
pub struct Session<'a, A> {
    api: &'a A,
    auth_token: AuthToken,
    from_station: Station,
    to_station: Station,
    travelers: Vec<Traveler>,
    extractor: OfferExtractor,
}

impl<'a, A: BookingApi> Session<'a, A> {
    /// Start a backend session and resolve both station names.
    ///
    /// `travelers` defaults to [`Traveler::default_party`] when `None` or
    /// empty. Fails if the backend hands out no token or either name is
    /// ambiguous.
    #[instrument(skip(api, travelers))]
    pub async fn start(
        api: &'a A,
        from: &str,
        to: &str,
        travelers: Option<Vec<Traveler>>,
    ) -> Result<Self, SessionError> {
        let auth_token = api.start_session().await?;

        let from_station = resolve_station(api, &auth_token, from).await?;
        let to_station = resolve_station(api, &auth_token, to).await?;

        let travelers = match travelers {
            Some(travelers) if !travelers.is_empty() => travelers,
            _ => Traveler::default_party(),
        };

        info!(
            from = %from_station,
            to = %to_station,
            travelers = travelers.len(),
            "session started"
        );

        Ok(Self {
            api,
            auth_token,
            from_station,
            to_station,
            travelers,
            extractor: OfferExtractor::new(),
        })
    }

    pub fn from_station(&self) -> &Station {
        &self.from_station
    }

    pub fn to_station(&self) -> &Station {
        &self.to_station
    }

    pub fn travelers(&self) -> &[Traveler] {
        &self.travelers
    }

    /// Origin and destination for a direction.
    pub fn endpoints(&self, direction: Direction) -> (&Station, &Station) {
        match direction {
            Direction::Outward => (&self.from_station, &self.to_station),
            Direction::Return => (&self.to_station, &self.from_station),
        }
    }

    /// Up to `desired_count` priced outward connections on `date`.
    pub async fn get_connections(
        &self,
        date: NaiveDate,
        desired_count: usize,
    ) -> Result<Vec<Connection>, SessionError> {
        self.list_connections(Direction::Outward, date, desired_count)
            .await
    }

    /// Up to `desired_count` priced return connections on `date`.
    pub async fn get_return_connections(
        &self,
        date: NaiveDate,
        desired_count: usize,
    ) -> Result<Vec<Connection>, SessionError> {
        self.list_connections(Direction::Return, date, desired_count)
            .await
    }

    /// Page through the listing and price connections until
    /// `desired_count` are collected or a page comes back empty.
    ///
    /// Each page is requested with `skip` set to the number of connections
    /// collected so far. Connections beyond `desired_count` on the last
    /// page are never priced.
    #[instrument(skip(self))]
    pub async fn list_connections(
        &self,
        direction: Direction,
        date: NaiveDate,
        desired_count: usize,
    ) -> Result<Vec<Connection>, SessionError> {
        let (from, to) = self.endpoints(direction);
        let mut collected = Vec::new();

        while collected.len() < desired_count {
            let skip = collected.len();
            let page = self
                .api
                .get_connections(&self.auth_token, from.eva_number, to.eva_number, date, skip)
                .await?;

            let records = page.into_connections();
            if records.is_empty() {
                debug!(skip, "listing exhausted");
                break;
            }

            let wanted = desired_count - collected.len();
            for record in records.iter().take(wanted) {
                let connection = convert_connection(record)?;
                collected.push(self.price(connection).await?);
            }
        }

        info!(
            from = %from,
            to = %to,
            found = collected.len(),
            "connections collected"
        );
        Ok(collected)
    }

    /// Fetch and attach the offers for one connection.
    async fn price(&self, connection: Connection) -> Result<Connection, SessionError> {
        let request = offer_request(&connection, &self.travelers)?;
        let document = self.api.get_offers(&self.auth_token, &request).await?;
        let offers = self.extractor.extract(&document)?;

        debug!(
            train = %request.filter.nj_train,
            offers = offers.len(),
            "connection priced"
        );
        Ok(connection.with_offers(offers)?)
    }
}

impl<A> fmt::Debug for Session<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("auth_token", &self.auth_token)
            .field("from_station", &self.from_station)
            .field("to_station", &self.to_station)
            .field("travelers", &self.travelers)
            .finish_non_exhaustive()
    }
}

/// Search a station name and resolve it to exactly one station.
pub async fn resolve_station<A: BookingApi>(
    api: &A,
    token: &AuthToken,
    name: &str,
) -> Result<Station, SessionError> {
    let candidates = api.find_stations(token, name).await?;
    let station = stations::resolve(name, candidates)?;
    debug!(query = name, station = %station, "station resolved");
    Ok(station)
}
