//! Plain-text report.

use std::fmt::{self, Write};

use chrono::NaiveDate;

use crate::journey::{DirectionResult, JourneyReport};

/// Heading line for one direction, e.g.
/// "Wien Hbf (8103000) -> München Area (8096022) outward connections up from 2025-10-18:".
pub fn direction_heading(result: &DirectionResult) -> String {
    format!(
        "{} -> {} {} connections up from {}:",
        result.from_station, result.to_station, result.direction, result.date
    )
}

/// Render all journeys as text, headed by the creation date.
pub fn render_text(reports: &[JourneyReport], created: NaiveDate) -> String {
    let mut out = String::new();
    write_report(&mut out, reports, created).expect("writing to a String never fails");
    out
}

fn write_report(out: &mut String, reports: &[JourneyReport], created: NaiveDate) -> fmt::Result {
    writeln!(out, "Creation date: {}", created.format("%Y-%m-%d"))?;
    writeln!(out)?;

    for report in reports {
        match &report.outcome {
            Ok(result) => {
                for direction in result.directions() {
                    write_direction(out, direction)?;
                }
            }
            Err(err) => {
                writeln!(
                    out,
                    "{} -> {} failed: {err}",
                    report.spec.origin, report.spec.destination
                )?;
                writeln!(out)?;
            }
        }
    }

    Ok(())
}

fn write_direction(out: &mut String, result: &DirectionResult) -> fmt::Result {
    writeln!(out, "{}", direction_heading(result))?;

    if result.connections.is_empty() {
        writeln!(out, "No matching connections found")?;
    }

    for (i, connection) in result.connections.iter().enumerate() {
        writeln!(out, "  {}: {connection}:", i + 1)?;
        match connection.offers() {
            Some(offers) if !offers.is_empty() => {
                for offer in offers {
                    writeln!(out, "  - {offer}")?;
                }
            }
            _ => writeln!(out, "  - No offers")?,
        }
    }

    writeln!(out)
}
