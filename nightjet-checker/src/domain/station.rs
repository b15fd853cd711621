//! Station identity types.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid EVA number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid EVA number: {reason}")]
pub struct InvalidEvaNumber {
    reason: &'static str,
}

/// A station number in the booking backend (the UIC/EVA number).
///
/// The backend sends these both as JSON numbers and as numeric strings,
/// so parsing accepts surrounding whitespace but nothing else.
///
/// # Examples
///
/// ```
/// use nightjet_checker::domain::EvaNumber;
///
/// let munich = EvaNumber::parse("8000261").unwrap();
/// assert_eq!(munich.get(), 8000261);
///
/// assert!(EvaNumber::parse("").is_err());
/// assert!(EvaNumber::parse("80a").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvaNumber(u64);

impl EvaNumber {
    /// Wrap a raw number.
    pub fn new(number: u64) -> Self {
        EvaNumber(number)
    }

    /// Parse an EVA number from its decimal string form.
    pub fn parse(s: &str) -> Result<Self, InvalidEvaNumber> {
        let s = s.trim();

        if s.is_empty() {
            return Err(InvalidEvaNumber {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidEvaNumber {
                reason: "must be decimal digits",
            });
        }

        s.parse().map(EvaNumber).map_err(|_| InvalidEvaNumber {
            reason: "out of range",
        })
    }

    /// Returns the raw number.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl FromStr for EvaNumber {
    type Err = InvalidEvaNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for EvaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EvaNumber({})", self.0)
    }
}

impl fmt::Display for EvaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A place in the booking backend.
///
/// Either a specific station or a "meta" station grouping several
/// stations of one metro area (e.g. all of Munich).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    pub eva_number: EvaNumber,
    pub name: String,
    pub is_meta: bool,
}

impl Station {
    /// A specific (non-meta) station.
    pub fn new(eva_number: EvaNumber, name: impl Into<String>) -> Self {
        Self {
            eva_number,
            name: name.into(),
            is_meta: false,
        }
    }

    /// A meta station covering an area.
    pub fn meta(eva_number: EvaNumber, name: impl Into<String>) -> Self {
        Self {
            eva_number,
            name: name.into(),
            is_meta: true,
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let area = if self.is_meta { " Area" } else { "" };
        write!(f, "{}{} ({})", self.name, area, self.eva_number)
    }
}
