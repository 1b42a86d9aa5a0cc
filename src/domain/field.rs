//! The capability shared by every record field.

use std::fmt;

/// A labeled value held by a [`Record`](crate::models::Record).
///
/// Fields carry unrelated payloads (text, a list of numbers, a date), so the
/// only thing they share is access to that payload and a display form.
pub trait Field: fmt::Display {
    /// The payload type.
    type Value: ?Sized;

    /// Borrow the payload.
    fn value(&self) -> &Self::Value;
}
