//! Booking backend request and response DTOs.
//!
//! These types map directly to the backend's JSON. Fields the backend is
//! known to omit or null out are `Option` or defaulted; validation happens
//! when converting into domain types.

use serde::{Deserialize, Serialize};

use crate::domain::{EvaNumber, Gender, Traveler};

/// A numeric field the backend sends either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Text(String),
}

impl Numeric {
    /// The value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Numeric::Int(n) => Some(*n),
            Numeric::Text(s) => s.trim().parse().ok(),
        }
    }

    /// The value as an EVA number, if it is one.
    pub fn as_eva_number(&self) -> Option<EvaNumber> {
        match self {
            Numeric::Int(n) => u64::try_from(*n).ok().map(EvaNumber::new),
            Numeric::Text(s) => EvaNumber::parse(s).ok(),
        }
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Numeric::Int(n) => write!(f, "{n}"),
            Numeric::Text(s) => f.write_str(s),
        }
    }
}

/// Response from `POST /init/start`.
#[derive(Debug, Clone, Deserialize)]
pub struct InitResponse {
    pub token: Option<String>,
}

/// A station as returned by `GET /stations/find` and inside connections.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StationRecord {
    /// EVA number of the station.
    pub number: Numeric,

    /// Display name.
    pub name: String,

    /// Name of the area for meta stations; empty or absent otherwise.
    #[serde(default)]
    pub meta: Option<String>,
}

impl StationRecord {
    /// Whether this record describes a meta (area) station.
    pub fn is_meta(&self) -> bool {
        self.meta.as_deref().is_some_and(|m| !m.is_empty())
    }
}

impl std::fmt::Display for StationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.number)?;
        if let Some(meta) = self.meta.as_deref().filter(|m| !m.is_empty()) {
            write!(f, " [meta: {meta}]")?;
        }
        Ok(())
    }
}

/// Response from `GET /connection/{from}/{to}/{date}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionPage {
    /// Connections on this page. Absent, null and empty all mean
    /// there are no further results.
    #[serde(default)]
    pub connections: Option<Vec<ConnectionRecord>>,
}

impl ConnectionPage {
    /// The page's connections, treating a missing list as empty.
    pub fn into_connections(self) -> Vec<ConnectionRecord> {
        self.connections.unwrap_or_default()
    }
}

/// A connection on a listing page.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionRecord {
    pub from: StationRecord,
    pub to: StationRecord,

    #[serde(default)]
    pub trains: Vec<TrainRecord>,
}

/// One train within a connection record.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainRecord {
    /// Train number/name.
    pub train: String,
    pub departure: TimeRecord,
    pub arrival: TimeRecord,
}

/// A departure or arrival time.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeRecord {
    /// Local time, formatted by the backend.
    pub local: String,

    /// UTC epoch timestamp. Always present on departures.
    #[serde(default)]
    pub utc: Option<Numeric>,
}

/// Body of `POST /offer/get`, minus the language field the client adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRequest {
    pub nj_from: u64,
    pub nj_to: u64,
    pub nj_dep: i64,
    pub max_changes: u8,
    pub connections: u8,
    pub filter: OfferFilter,
    pub objects: Vec<PassengerObject>,
}

/// Restricts an offer search to one train departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferFilter {
    pub nj_train: String,
    pub nj_departure: i64,
}

/// A passenger in an offer search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: Gender,
    pub birth_date: String,
    pub cards: Vec<String>,
}

impl From<&Traveler> for PassengerObject {
    fn from(traveler: &Traveler) -> Self {
        Self {
            kind: "person".to_string(),
            gender: traveler.gender,
            birth_date: traveler.birth_date(),
            cards: Vec::new(),
        }
    }
}

/// Any request body, with the session language merged in.
#[derive(Debug, Serialize)]
pub(crate) struct WithLang<'a, T: Serialize> {
    pub lang: &'a str,
    #[serde(flatten)]
    pub body: &'a T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn station_record_with_string_number() {
        let record: StationRecord = serde_json::from_value(json!({
            "number": "8000261",
            "name": "München Hbf",
            "meta": ""
        }))
        .unwrap();

        assert_eq!(record.number.as_eva_number(), Some(EvaNumber::new(8000261)));
        assert!(!record.is_meta());
    }

    #[test]
    fn station_record_with_numeric_number() {
        let record: StationRecord = serde_json::from_value(json!({
            "number": 8096022,
            "name": "MÜNCHEN",
            "meta": "München"
        }))
        .unwrap();

        assert_eq!(record.number.as_eva_number(), Some(EvaNumber::new(8096022)));
        assert!(record.is_meta());
    }

    #[test]
    fn station_record_without_meta() {
        let record: StationRecord =
            serde_json::from_value(json!({"number": 1, "name": "A"})).unwrap();
        assert!(!record.is_meta());

        let record: StationRecord =
            serde_json::from_value(json!({"number": 1, "name": "A", "meta": null})).unwrap();
        assert!(!record.is_meta());
    }

    #[test]
    fn numeric_conversions() {
        assert_eq!(Numeric::Int(42).as_i64(), Some(42));
        assert_eq!(Numeric::Text(" 42 ".into()).as_i64(), Some(42));
        assert_eq!(Numeric::Text("abc".into()).as_i64(), None);
        assert_eq!(Numeric::Int(-1).as_eva_number(), None);
    }

    #[test]
    fn connection_page_missing_or_null_is_empty() {
        let page: ConnectionPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.into_connections().is_empty());

        let page: ConnectionPage = serde_json::from_value(json!({"connections": null})).unwrap();
        assert!(page.into_connections().is_empty());
    }

    #[test]
    fn connection_record_parses() {
        let page: ConnectionPage = serde_json::from_value(json!({
            "connections": [{
                "from": {"number": "8000261", "name": "München Hbf"},
                "to": {"number": "8300046", "name": "Milano Centrale"},
                "trains": [{
                    "train": "NJ 40295",
                    "departure": {"local": "20:20", "utc": 1760811600},
                    "arrival": {"local": "08:50"}
                }]
            }]
        }))
        .unwrap();

        let connections = page.into_connections();
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].trains[0].train, "NJ 40295");
        assert_eq!(
            connections[0].trains[0].departure.utc.as_ref().and_then(Numeric::as_i64),
            Some(1760811600)
        );
        assert!(connections[0].trains[0].arrival.utc.is_none());
    }

    #[test]
    fn offer_request_wire_format() {
        let request = OfferRequest {
            nj_from: 8000261,
            nj_to: 8300046,
            nj_dep: 1760811600,
            max_changes: 0,
            connections: 1,
            filter: OfferFilter {
                nj_train: "NJ 40295".into(),
                nj_departure: 1760811600,
            },
            objects: vec![PassengerObject::from(&Traveler::female(1983))],
        };

        let body = serde_json::to_value(WithLang {
            lang: "de",
            body: &request,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "lang": "de",
                "njFrom": 8000261,
                "njTo": 8300046,
                "njDep": 1760811600,
                "maxChanges": 0,
                "connections": 1,
                "filter": {"njTrain": "NJ 40295", "njDeparture": 1760811600},
                "objects": [{
                    "type": "person",
                    "gender": "female",
                    "birthDate": "1983-06-08",
                    "cards": []
                }]
            })
        );
    }
}
