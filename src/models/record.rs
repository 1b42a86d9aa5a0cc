//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A contact: a name, an ordered list of phone numbers and an optional birthday.
///
/// Serialized field order is `name`, `phones`, `birthday`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name
    pub name: Name,

    /// Phone numbers, in the order they were added
    #[serde(rename = "phones", default)]
    pub phone: Phone,

    /// Birthday, if known
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phone numbers and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phone: Phone::new(),
            birthday: None,
        }
    }

    /// Create a record with a known birthday.
    pub fn with_birthday(name: impl Into<String>, birthday: Birthday) -> Self {
        Self {
            birthday: Some(birthday),
            ..Self::new(name)
        }
    }

    pub fn add_phone_number(&mut self, number: &str) -> Result<(), ValidationError> {
        self.phone.add_number(number)
    }

    pub fn remove_phone_number(&mut self, number: &str) -> bool {
        self.phone.remove_number(number)
    }

    /// Swap the first phone number for `number`.
    ///
    /// `number` is validated before anything is removed, so a rejected number
    /// leaves the record unchanged. A record without numbers just gains one.
    pub fn replace_phone_number(&mut self, number: &str) -> Result<(), ValidationError> {
        let mut updated = self.phone.clone();
        if let Some(first) = updated.first().cloned() {
            updated.remove_number(first.as_str());
        }
        updated.add_number(number)?;
        self.phone = updated;
        Ok(())
    }

    /// Parse and store a birthday. The old value is kept on error.
    pub fn set_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday. `None` without a birthday.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|birthday| birthday.days_until(today))
    }
}
