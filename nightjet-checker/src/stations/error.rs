//! Station resolution error types.

use std::fmt;

use crate::booking::{ConversionError, StationRecord};

/// Why a station search did not identify exactly one station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ambiguity {
    /// The search returned nothing.
    NoMatch,
    /// More than one meta station matched.
    MultipleMeta,
    /// No meta station and more than one specific station matched.
    MultipleStations,
}

impl fmt::Display for Ambiguity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ambiguity::NoMatch => f.write_str("no matching station found"),
            Ambiguity::MultipleMeta => f.write_str("multiple meta station matches"),
            Ambiguity::MultipleStations => f.write_str("multiple station matches"),
        }
    }
}

/// Errors that can occur when resolving a station name.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StationError {
    /// Zero or several candidates in the deciding group
    #[error("{reason} for {query:?}{}", alternatives(.candidates))]
    AmbiguousOrNoStation {
        query: String,
        reason: Ambiguity,
        candidates: Vec<StationRecord>,
    },

    /// The chosen candidate could not be converted
    #[error("invalid station record: {0}")]
    InvalidRecord(#[from] ConversionError),
}

impl StationError {
    /// The raw candidates, so callers can offer alternatives.
    pub fn candidates(&self) -> &[StationRecord] {
        match self {
            StationError::AmbiguousOrNoStation { candidates, .. } => candidates,
            StationError::InvalidRecord(_) => &[],
        }
    }
}

fn alternatives(candidates: &[StationRecord]) -> String {
    if candidates.is_empty() {
        return String::new();
    }
    let names: Vec<String> = candidates.iter().map(ToString::to_string).collect();
    format!(", please specify one of: {}", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Numeric;

    fn record(number: i64, name: &str, meta: &str) -> StationRecord {
        StationRecord {
            number: Numeric::Int(number),
            name: name.to_string(),
            meta: Some(meta.to_string()),
        }
    }

    #[test]
    fn error_display() {
        let err = StationError::AmbiguousOrNoStation {
            query: "Atlantis".into(),
            reason: Ambiguity::NoMatch,
            candidates: Vec::new(),
        };
        assert_eq!(err.to_string(), "no matching station found for \"Atlantis\"");

        let err = StationError::AmbiguousOrNoStation {
            query: "Wien".into(),
            reason: Ambiguity::MultipleStations,
            candidates: vec![
                record(8103000, "Wien Hbf", ""),
                record(8100003, "Wien Westbahnhof", ""),
            ],
        };
        assert_eq!(
            err.to_string(),
            "multiple station matches for \"Wien\", please specify one of: Wien Hbf (8103000), Wien Westbahnhof (8100003)"
        );

        let err = StationError::AmbiguousOrNoStation {
            query: "M".into(),
            reason: Ambiguity::MultipleMeta,
            candidates: vec![record(1, "MÜNCHEN", "München"), record(2, "MAILAND", "Milano")],
        };
        assert!(err.to_string().starts_with("multiple meta station matches"));
        assert!(err.to_string().contains("MAILAND (2) [meta: Milano]"));
        assert_eq!(err.candidates().len(), 2);
    }
}
