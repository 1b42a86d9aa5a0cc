//! Name field.

use super::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's display name. Free-form text, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-sensitive substring test.
    pub fn contains(&self, query: &str) -> bool {
        self.0.contains(query)
    }
}

impl Field for Name {
    type Value = str;

    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
