//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default.

use crate::error::{ConfigError, ConfigResult};
use crate::search::PhoneMatch;
use std::env;
use std::path::PathBuf;

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON data file (default: "address_book.json")
    pub data_file: PathBuf,

    /// Records per page for `show all` (default: 10)
    pub page_size: usize,

    /// Phone matching policy for `search` (default: exact)
    pub phone_match: PhoneMatch,

    /// Load the data file on start and save it on exit (default: true)
    pub autosave: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: data file path (default: "address_book.json")
    /// - `ADDRESS_BOOK_PAGE_SIZE`: records per page, > 0 (default: 10)
    /// - `ADDRESS_BOOK_PHONE_MATCH`: "exact" or "substring" (default: "exact")
    /// - `ADDRESS_BOOK_AUTOSAVE`: true/false (default: true)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let data_file = env::var("ADDRESS_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let phone_match = match env::var("ADDRESS_BOOK_PHONE_MATCH") {
            Ok(val) => val
                .parse::<PhoneMatch>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PHONE_MATCH".to_string(),
                    reason,
                })?,
            Err(_) => defaults.phone_match,
        };

        let autosave = Self::parse_env_bool("ADDRESS_BOOK_AUTOSAVE", defaults.autosave)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            data_file,
            page_size,
            phone_match,
            autosave,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("address_book.json"),
            page_size: 10,
            phone_match: PhoneMatch::Exact,
            autosave: true,
            log_level: "error".to_string(),
        }
    }
}
