//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when operating on the address book.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record matched
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Paging needs at least one record per page
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    /// Reading or writing the backing store failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur while persisting records.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not a valid record list
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
