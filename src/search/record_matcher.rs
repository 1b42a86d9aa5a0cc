//! Query matching against a single record.

use crate::models::Record;
use std::fmt;
use std::str::FromStr;

/// How a query is compared with a record's phone numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhoneMatch {
    /// The query must equal one stored number.
    ///
    /// `"123"` does not find a record whose only number is `"1234567890"`.
    #[default]
    Exact,

    /// The query may appear anywhere inside a stored number.
    Substring,
}

impl FromStr for PhoneMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "substring" => Ok(Self::Substring),
            other => Err(format!(
                "Must be 'exact' or 'substring', got: {}",
                other
            )),
        }
    }
}

impl fmt::Display for PhoneMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Substring => write!(f, "substring"),
        }
    }
}

/// Matches records against a query string.
#[derive(Debug, Clone, Copy)]
pub struct RecordMatcher<'q> {
    query: &'q str,
    phone_match: PhoneMatch,
}

impl<'q> RecordMatcher<'q> {
    pub fn new(query: &'q str, phone_match: PhoneMatch) -> Self {
        Self { query, phone_match }
    }

    /// True when the name contains the query or a phone number matches it.
    pub fn matches(&self, record: &Record) -> bool {
        if record.name.contains(self.query) {
            return true;
        }

        match self.phone_match {
            PhoneMatch::Exact => record.phone.contains(self.query),
            PhoneMatch::Substring => record.phone.any_contains(self.query),
        }
    }
}
