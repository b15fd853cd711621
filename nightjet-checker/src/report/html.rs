//! HTML report rendered through askama.

use std::path::Path;

use askama::Template;
use chrono::NaiveDate;

use crate::journey::{DirectionResult, JourneyReport};

use super::ReportError;
use super::text::direction_heading;

/// Full report page.
#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub created: String,
    pub journeys: Vec<JourneyView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One journey, or the error that ended it.
#[derive(Debug, Clone)]
pub struct JourneyView {
    pub title: String,
    pub failed: bool,
    pub error: String,
    pub directions: Vec<DirectionView>,
}

impl JourneyView {
    pub fn from_report(report: &JourneyReport) -> Self {
        let title = format!("{} -> {}", report.spec.origin, report.spec.destination);

        match &report.outcome {
            Ok(result) => Self {
                title,
                failed: false,
                error: String::new(),
                directions: result.directions().map(DirectionView::from_result).collect(),
            },
            Err(err) => Self {
                title,
                failed: true,
                error: err.to_string(),
                directions: Vec::new(),
            },
        }
    }
}

/// Connections for one direction.
#[derive(Debug, Clone)]
pub struct DirectionView {
    pub heading: String,
    pub connections: Vec<ConnectionView>,
}

impl DirectionView {
    pub fn from_result(result: &DirectionResult) -> Self {
        let connections = result
            .connections
            .iter()
            .enumerate()
            .map(|(i, connection)| ConnectionView {
                number: i + 1,
                summary: connection.to_string(),
                offers: connection
                    .offers()
                    .unwrap_or_default()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect();

        Self {
            heading: direction_heading(result),
            connections,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConnectionView {
    pub number: usize,
    pub summary: String,
    pub offers: Vec<String>,
}

/// Render all journeys as an HTML page.
pub fn render_html(reports: &[JourneyReport], created: NaiveDate) -> Result<String, ReportError> {
    let template = ReportTemplate {
        created: created.format("%Y-%m-%d").to_string(),
        journeys: reports.iter().map(JourneyView::from_report).collect(),
    };
    Ok(template.render()?)
}

/// Render the HTML report and write it to `path`.
pub fn write_html(
    path: &Path,
    reports: &[JourneyReport],
    created: NaiveDate,
) -> Result<(), ReportError> {
    let html = render_html(reports, created)?;
    std::fs::write(path, html).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingError;
    use crate::domain::{Connection, EvaNumber, Offer, Station, Train};
    use crate::journey::{JourneyResult, JourneySpec};
    use crate::session::{Direction, SessionError};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    fn reports() -> Vec<JourneyReport> {
        let from = Station::new(EvaNumber::new(8103000), "Wien Hbf");
        let to = Station::new(EvaNumber::new(8503000), "Zürich HB");
        let connection = Connection::new(
            from.clone(),
            to.clone(),
            vec![Train::new("NJ 466", "21:27", "08:20", 1)],
        )
        .with_offers(vec![Offer::new("Sparschiene", vec!["Liegewagen <4er>".into()])])
        .unwrap();

        vec![
            JourneyReport {
                spec: JourneySpec::parse("Wien|Zürich|2025-10-18", date(1)).unwrap(),
                outcome: Ok(JourneyResult {
                    outward: DirectionResult {
                        direction: Direction::Outward,
                        from_station: from,
                        to_station: to,
                        date: date(18),
                        connections: vec![connection],
                    },
                    return_trip: None,
                }),
            },
            JourneyReport {
                spec: JourneySpec::parse("Wien|Atlantis|2025-10-18", date(1)).unwrap(),
                outcome: Err(SessionError::Remote(BookingError::Unauthorized)),
            },
        ]
    }

    #[test]
    fn view_models() {
        let reports = reports();

        let ok = JourneyView::from_report(&reports[0]);
        assert!(!ok.failed);
        assert_eq!(ok.title, "Wien -> Zürich");
        assert_eq!(ok.directions.len(), 1);
        assert_eq!(ok.directions[0].connections[0].number, 1);
        assert_eq!(
            ok.directions[0].connections[0].offers,
            ["Sparschiene: (Liegewagen <4er>)"]
        );

        let failed = JourneyView::from_report(&reports[1]);
        assert!(failed.failed);
        assert!(failed.directions.is_empty());
        assert!(!failed.error.is_empty());
    }

    #[test]
    fn html_contains_report_and_escapes() {
        let html = render_html(&reports(), date(1)).unwrap();

        assert!(html.contains("Creation date: 2025-10-01"));
        assert!(html.contains("outward connections up from 2025-10-18"));
        assert!(html.contains("Liegewagen &lt;4er&gt;"));
        assert!(!html.contains("Liegewagen <4er>"));
        assert!(html.contains("Wien -&gt; Atlantis"));
    }

    #[test]
    fn write_html_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        write_html(&path, &reports(), date(1)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("NJ 466"));
    }

    #[test]
    fn write_html_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.html");

        let err = write_html(&path, &reports(), date(1)).unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }));
    }
}
