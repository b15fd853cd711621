//! Journeys: what to look up and how to run it.
//!
//! A journey names two stations, an outward date and optionally a return
//! date. Each journey runs in its own session, and journeys run one after
//! another so a failure in one never affects the others.

mod run;
mod spec;

pub use run::{DirectionResult, JourneyReport, JourneyResult, run_journey, run_journeys};
pub use spec::{DEFAULT_COUNT, JourneySpec, JourneySpecError};
