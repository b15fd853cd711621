//! Passenger descriptions used for pricing.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Month and day sent as every traveler's birthday.
///
/// Only the year is known, so a fixed mid-year date gives a stable age
/// bracket from the pricing engine.
const BIRTH_MONTH_DAY: &str = "06-08";

/// Genders accepted by the booking backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a traveler description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid traveler {input:?}: {reason}")]
pub struct InvalidTraveler {
    input: String,
    reason: &'static str,
}

/// A passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Traveler {
    pub gender: Gender,
    pub year_of_birth: u16,
}

impl Traveler {
    pub fn female(year_of_birth: u16) -> Self {
        Self {
            gender: Gender::Female,
            year_of_birth,
        }
    }

    pub fn male(year_of_birth: u16) -> Self {
        Self {
            gender: Gender::Male,
            year_of_birth,
        }
    }

    /// Birth date in the backend's `YYYY-MM-DD` format.
    pub fn birth_date(&self) -> String {
        format!("{:04}-{}", self.year_of_birth, BIRTH_MONTH_DAY)
    }

    /// The traveler priced when none are given: one adult born 1980.
    pub fn default_party() -> Vec<Traveler> {
        vec![Traveler::male(1980)]
    }
}

/// Parses `gender:year`, e.g. `female:1983`.
impl FromStr for Traveler {
    type Err = InvalidTraveler;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| InvalidTraveler {
            input: s.to_string(),
            reason,
        };

        let (gender, year) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected gender:year"))?;

        let gender = match gender.trim().to_ascii_lowercase().as_str() {
            "female" | "f" => Gender::Female,
            "male" | "m" => Gender::Male,
            _ => return Err(invalid("gender must be female or male")),
        };

        let year: u16 = year
            .trim()
            .parse()
            .map_err(|_| invalid("year of birth must be a number"))?;
        if !(1900..=9999).contains(&year) {
            return Err(invalid("year of birth out of range"));
        }

        Ok(Traveler {
            gender,
            year_of_birth: year,
        })
    }
}
