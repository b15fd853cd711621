//! Rendering journey results.
//!
//! The text report goes to stdout; the HTML report, when requested, is the
//! same content written to a file.

mod html;
mod text;

use std::path::PathBuf;

pub use html::{
    ConnectionView, DirectionView, JourneyView, ReportTemplate, render_html, write_html,
};
pub use text::{direction_heading, render_text};

/// Errors producing a report file.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Template rendering failed
    #[error("failed to render report: {0}")]
    Render(#[from] askama::Error),

    /// Writing the report file failed
    #[error("failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
