//! Station name disambiguation.

use crate::booking::{StationRecord, convert_meta_station, convert_station};
use crate::domain::Station;

use super::error::{Ambiguity, StationError};

/// Pick the one station a search response refers to.
///
/// A search for a city returns both its specific stations and, where one
/// exists, a meta station covering the whole area. A unique meta station
/// wins regardless of how many specific stations came with it; failing
/// that, a unique specific station is used. Anything else is an error
/// carrying every candidate.
///
/// A meta station is named by its area (`meta`), a specific station by
/// its `name`.
pub fn resolve(query: &str, candidates: Vec<StationRecord>) -> Result<Station, StationError> {
    let (meta, specific): (Vec<&StationRecord>, Vec<&StationRecord>) =
        candidates.iter().partition(|c| c.is_meta());

    let reason = match (meta.as_slice(), specific.as_slice()) {
        ([only], _) => return Ok(convert_meta_station(only)?),
        ([], [only]) => return Ok(convert_station(only)?),
        ([], []) => Ambiguity::NoMatch,
        ([], _) => Ambiguity::MultipleStations,
        (_, _) => Ambiguity::MultipleMeta,
    };

    Err(StationError::AmbiguousOrNoStation {
        query: query.to_string(),
        reason,
        candidates,
    })
}
