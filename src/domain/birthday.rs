//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

// Four-digit year; month and day may drop their leading zero ("1990-5-7").
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("Failed to compile date regex")
});

/// A validated calendar date in `YYYY-MM-DD` form.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-05-17").unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-17");
/// assert!(Birthday::new("1990-02-30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not match
    /// the format or names a day that does not exist.
    pub fn new(date: &str) -> Result<Self, ValidationError> {
        if !DATE_REGEX.is_match(date) {
            return Err(ValidationError::InvalidBirthday(date.to_string()));
        }

        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(date.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day this birthday is celebrated in `year`.
    ///
    /// Feb 29 falls on Mar 1 in non-leap years. `None` only when `year` is
    /// outside chrono's representable range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// First occurrence on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self.occurrence_in(today.year()) {
            Some(date) if date >= today => Some(date),
            _ => self.occurrence_in(today.year() + 1),
        }
    }

    /// Days from `today` until the next occurrence; 0 on the day itself.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        self.next_occurrence(today)
            .map_or(0, |next| (next - today).num_days())
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

// Serde support - serialize as YYYY-MM-DD
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
