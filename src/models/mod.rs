//! Data models for the address book.
//!
//! A [`Record`] is one contact: a name, its phone numbers and an optional
//! birthday.

pub mod record;

pub use record::Record;
