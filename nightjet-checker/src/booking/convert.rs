//! Conversion between booking DTOs and domain types.

use crate::domain::{Connection, DomainError, EvaNumber, Station, Train, Traveler};

use super::types::{
    ConnectionRecord, OfferFilter, OfferRequest, PassengerObject, StationRecord, TrainRecord,
};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a station number
    #[error("invalid station number for {name}: {value}")]
    InvalidStationNumber { name: String, value: String },

    /// Failed to parse a timestamp
    #[error("invalid timestamp for train {train}: {value}")]
    InvalidTimestamp { train: String, value: String },

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert a station record as a specific station, named by its `name`.
///
/// Connection endpoints always go through here, whatever their meta flag.
pub fn convert_station(record: &StationRecord) -> Result<Station, ConversionError> {
    Ok(Station::new(eva_number(record)?, record.name.clone()))
}

/// Convert a meta station record, named by the area in its `meta` field.
pub fn convert_meta_station(record: &StationRecord) -> Result<Station, ConversionError> {
    let area = record
        .meta
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or(ConversionError::MissingField("meta"))?;

    Ok(Station::meta(eva_number(record)?, area))
}

fn eva_number(record: &StationRecord) -> Result<EvaNumber, ConversionError> {
    record
        .number
        .as_eva_number()
        .ok_or_else(|| ConversionError::InvalidStationNumber {
            name: record.name.clone(),
            value: record.number.to_string(),
        })
}

/// Convert a single train record.
pub fn convert_train(record: &TrainRecord) -> Result<Train, ConversionError> {
    let utc = record
        .departure
        .utc
        .as_ref()
        .ok_or(ConversionError::MissingField("departure.utc"))?;

    let departure_timestamp = utc
        .as_i64()
        .ok_or_else(|| ConversionError::InvalidTimestamp {
            train: record.train.clone(),
            value: utc.to_string(),
        })?;

    Ok(Train {
        ident: record.train.clone(),
        departure_display: record.departure.local.clone(),
        arrival_display: record.arrival.local.clone(),
        departure_timestamp,
    })
}

/// Convert a connection record into an unpriced connection.
///
/// A record without trains converts fine; the missing departure train
/// surfaces when the connection is priced.
pub fn convert_connection(record: &ConnectionRecord) -> Result<Connection, ConversionError> {
    let from_station = convert_station(&record.from)?;
    let to_station = convert_station(&record.to)?;
    let trains = record
        .trains
        .iter()
        .map(convert_train)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Connection::new(from_station, to_station, trains))
}

/// Build the pricing request for exactly this connection and party.
pub fn offer_request(
    connection: &Connection,
    travelers: &[Traveler],
) -> Result<OfferRequest, DomainError> {
    let departure_train = connection.get_departure_train()?;

    Ok(OfferRequest {
        nj_from: connection.from_station.eva_number.get(),
        nj_to: connection.to_station.eva_number.get(),
        nj_dep: departure_train.departure_timestamp,
        max_changes: 0,
        connections: 1,
        filter: OfferFilter {
            nj_train: departure_train.ident.clone(),
            nj_departure: departure_train.departure_timestamp,
        },
        objects: travelers.iter().map(PassengerObject::from).collect(),
    })
}
