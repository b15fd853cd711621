//! Train legs.

use std::fmt;

/// One scheduled train within a connection.
///
/// The display times are passed through as the backend formats them;
/// only `departure_timestamp` is used to address the train when pricing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    /// Train number/name, e.g. "NJ 40295".
    pub ident: String,
    /// Local departure time as displayed by the backend.
    pub departure_display: String,
    /// Local arrival time as displayed by the backend.
    pub arrival_display: String,
    /// Departure as a UTC epoch value, echoed back in offer requests.
    pub departure_timestamp: i64,
}

impl Train {
    pub fn new(
        ident: impl Into<String>,
        departure_display: impl Into<String>,
        arrival_display: impl Into<String>,
        departure_timestamp: i64,
    ) -> Self {
        Self {
            ident: ident.into(),
            departure_display: departure_display.into(),
            arrival_display: arrival_display.into(),
            departure_timestamp,
        }
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} - {})",
            self.ident, self.departure_display, self.arrival_display
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let train = Train::new("NJ 295", "18.10.2025 20:20", "19.10.2025 08:50", 1760811600);
        assert_eq!(
            train.to_string(),
            "NJ 295 (18.10.2025 20:20 - 19.10.2025 08:50)"
        );
    }
}
