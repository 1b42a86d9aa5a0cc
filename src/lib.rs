//! Address Book - a personal contact manager.
//!
//! Stores names, phone numbers and birthdays, searches and pages through them,
//! and persists everything to a single JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone numbers, birthday)
//! - **models**: The contact record
//! - **book**: The ordered address book and its paging iterator
//! - **search**: Query matching against records
//! - **repositories**: Storage backends for the record list
//! - **shell**: Interactive command loop
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod search;
pub mod shell;

pub use book::{AddressBook, Pages};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, PhoneNumber, ValidationError};
pub use error::{AddressBookError, ConfigError, StorageError};
pub use models::Record;
pub use repositories::{JsonFileStore, RecordStore};
pub use search::{PhoneMatch, RecordMatcher};
pub use shell::{Command, Shell};
