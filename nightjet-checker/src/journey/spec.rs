//! Journey descriptors.

use std::fmt;

use chrono::{Days, NaiveDate};

/// Connections listed per direction when a descriptor gives no count.
pub const DEFAULT_COUNT: usize = 3;

const FIELD_SEPARATOR: char = '|';

/// Error returned when parsing a journey descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JourneySpecError {
    #[error("journey {input:?} has {found} fields, expected origin|destination|date[|count[|return_date]]")]
    FieldCount { input: String, found: usize },

    #[error("journey {input:?} has an empty {field}")]
    EmptyStation { input: String, field: &'static str },

    #[error("journey {input:?}: invalid date {value:?}, expected YYYY-MM-DD or +DAYS")]
    InvalidDate { input: String, value: String },

    #[error("journey {input:?}: invalid count {value:?}")]
    InvalidCount { input: String, value: String },
}

/// One requested journey: a station pair, an outward date and optionally a
/// return date, with the number of connections wanted per direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneySpec {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub count: usize,
    pub return_date: Option<NaiveDate>,
}

impl JourneySpec {
    /// Parse `origin|destination|date[|count[|return_date]]`.
    ///
    /// Dates are `YYYY-MM-DD` or `+N`, meaning N days after `today`.
    /// An empty count or return date field is treated as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use nightjet_checker::journey::JourneySpec;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 9, 20).unwrap();
    /// let spec = JourneySpec::parse("München|Mailand|+28||2025-10-27", today).unwrap();
    ///
    /// assert_eq!(spec.date, NaiveDate::from_ymd_opt(2025, 10, 18).unwrap());
    /// assert_eq!(spec.count, 3);
    /// assert_eq!(spec.return_date, NaiveDate::from_ymd_opt(2025, 10, 27));
    /// ```
    pub fn parse(input: &str, today: NaiveDate) -> Result<Self, JourneySpecError> {
        let fields: Vec<&str> = input.split(FIELD_SEPARATOR).map(str::trim).collect();

        let (origin, destination, date, count, return_date) = match fields.as_slice() {
            [o, d, date] => (*o, *d, *date, "", ""),
            [o, d, date, count] => (*o, *d, *date, *count, ""),
            [o, d, date, count, ret] => (*o, *d, *date, *count, *ret),
            _ => {
                return Err(JourneySpecError::FieldCount {
                    input: input.to_string(),
                    found: fields.len(),
                });
            }
        };

        let station = |value: &str, field| {
            if value.is_empty() {
                Err(JourneySpecError::EmptyStation {
                    input: input.to_string(),
                    field,
                })
            } else {
                Ok(value.to_string())
            }
        };

        let count = if count.is_empty() {
            DEFAULT_COUNT
        } else {
            count
                .parse()
                .map_err(|_| JourneySpecError::InvalidCount {
                    input: input.to_string(),
                    value: count.to_string(),
                })?
        };

        let return_date = if return_date.is_empty() {
            None
        } else {
            Some(parse_date(input, return_date, today)?)
        };

        Ok(JourneySpec {
            origin: station(origin, "origin")?,
            destination: station(destination, "destination")?,
            date: parse_date(input, date, today)?,
            count,
            return_date,
        })
    }
}

fn parse_date(input: &str, value: &str, today: NaiveDate) -> Result<NaiveDate, JourneySpecError> {
    let err = || JourneySpecError::InvalidDate {
        input: input.to_string(),
        value: value.to_string(),
    };

    match value.strip_prefix('+') {
        Some(days) => {
            let days: u64 = days.parse().map_err(|_| err())?;
            today.checked_add_days(Days::new(days)).ok_or_else(err)
        }
        None => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| err()),
    }
}

impl fmt::Display for JourneySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} on {}", self.origin, self.destination, self.date)?;
        if let Some(return_date) = self.return_date {
            write!(f, ", back on {return_date}")?;
        }
        Ok(())
    }
}
