//! PhoneNumber value object and the Phone field that holds a contact's numbers.

use super::errors::ValidationError;
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten ASCII digits with no formatting characters.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(PhoneNumber::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is ten digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_REGEX.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// The ordered list of phone numbers belonging to one record.
///
/// Duplicates are allowed. Every element has passed [`PhoneNumber::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone {
    numbers: Vec<PhoneNumber>,
}

impl Phone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `number` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and leaves the list untouched
    /// if `number` is not ten digits.
    pub fn add_number(&mut self, number: &str) -> Result<(), ValidationError> {
        let number = PhoneNumber::new(number)?;
        self.numbers.push(number);
        Ok(())
    }

    /// Remove the first occurrence of `number`. Returns whether one was found.
    pub fn remove_number(&mut self, number: &str) -> bool {
        match self.numbers.iter().position(|n| n == number) {
            Some(index) => {
                self.numbers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Exact-element membership.
    pub fn contains(&self, number: &str) -> bool {
        self.numbers.iter().any(|n| n == number)
    }

    /// Whether any stored number contains `query` as a substring.
    pub fn any_contains(&self, query: &str) -> bool {
        self.numbers.iter().any(|n| n.as_str().contains(query))
    }

    pub fn numbers(&self) -> &[PhoneNumber] {
        &self.numbers
    }

    pub fn first(&self) -> Option<&PhoneNumber> {
        self.numbers.first()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl Field for Phone {
    type Value = [PhoneNumber];

    fn value(&self) -> &[PhoneNumber] {
        &self.numbers
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, number) in self.numbers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", number)?;
        }
        Ok(())
    }
}
