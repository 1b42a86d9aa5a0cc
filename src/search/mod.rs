//! Record search.
//!
//! Names are matched by case-sensitive substring. Phone numbers are matched
//! according to a [`PhoneMatch`] policy.

pub mod record_matcher;

pub use record_matcher::{PhoneMatch, RecordMatcher};
