//! Domain value objects and record fields.
//!
//! Fields validate at construction time so an invalid phone number or
//! birthday can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::{Phone, PhoneNumber};
