//! Running journeys against the booking backend.

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::booking::BookingApi;
use crate::domain::{Connection, Station, Traveler};
use crate::session::{Direction, Session, SessionError};

use super::spec::JourneySpec;

/// Priced connections for one direction of a journey.
#[derive(Debug, Clone)]
pub struct DirectionResult {
    pub direction: Direction,
    pub from_station: Station,
    pub to_station: Station,
    pub date: NaiveDate,
    pub connections: Vec<Connection>,
}

/// Everything found for a journey.
#[derive(Debug, Clone)]
pub struct JourneyResult {
    pub outward: DirectionResult,
    pub return_trip: Option<DirectionResult>,
}

impl JourneyResult {
    /// The outward direction, then the return direction if requested.
    pub fn directions(&self) -> impl Iterator<Item = &DirectionResult> {
        std::iter::once(&self.outward).chain(self.return_trip.as_ref())
    }
}

/// A journey together with its result or the error that ended it.
#[derive(Debug)]
pub struct JourneyReport {
    pub spec: JourneySpec,
    pub outcome: Result<JourneyResult, SessionError>,
}

impl JourneyReport {
    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Run one journey in its own session.
///
/// Any failure aborts the whole journey; directions already listed are
/// discarded.
#[instrument(skip(api, spec, travelers), fields(journey = %spec))]
pub async fn run_journey<A: BookingApi>(
    api: &A,
    spec: &JourneySpec,
    travelers: &[Traveler],
) -> Result<JourneyResult, SessionError> {
    let session = Session::start(
        api,
        &spec.origin,
        &spec.destination,
        Some(travelers.to_vec()),
    )
    .await?;

    let outward = list_direction(&session, Direction::Outward, spec.date, spec.count).await?;

    let return_trip = match spec.return_date {
        Some(date) => Some(list_direction(&session, Direction::Return, date, spec.count).await?),
        None => None,
    };

    Ok(JourneyResult {
        outward,
        return_trip,
    })
}

async fn list_direction<A: BookingApi>(
    session: &Session<'_, A>,
    direction: Direction,
    date: NaiveDate,
    count: usize,
) -> Result<DirectionResult, SessionError> {
    let connections = session.list_connections(direction, date, count).await?;
    let (from_station, to_station) = session.endpoints(direction);

    Ok(DirectionResult {
        direction,
        from_station: from_station.clone(),
        to_station: to_station.clone(),
        date,
        connections,
    })
}

/// Run journeys one after another.
///
/// A failed journey is logged and recorded in its report; the remaining
/// journeys still run.
pub async fn run_journeys<A: BookingApi>(
    api: &A,
    specs: Vec<JourneySpec>,
    travelers: &[Traveler],
) -> Vec<JourneyReport> {
    let mut reports = Vec::with_capacity(specs.len());

    for spec in specs {
        let outcome = run_journey(api, &spec, travelers).await;
        match &outcome {
            Ok(result) => info!(
                journey = %spec,
                connections = result.directions().map(|d| d.connections.len()).sum::<usize>(),
                "journey finished"
            ),
            Err(err) => warn!(journey = %spec, error = %err, "journey failed"),
        }
        reports.push(JourneyReport { spec, outcome });
    }

    reports
}
