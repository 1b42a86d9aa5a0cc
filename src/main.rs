//! Address Book - Main entry point
//!
//! Loads the address book from its data file, runs the interactive shell on
//! stdin/stdout and writes the book back on exit.

use address_book::{AddressBook, Config, JsonFileStore, RecordStore, Shell};
use anyhow::{Context, Result};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep the interactive session on stdout clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");
    info!(
        "Data file: {} (autosave: {})",
        config.data_file.display(),
        config.autosave
    );

    let store = JsonFileStore::new(&config.data_file);
    let mut book = AddressBook::new();

    if config.autosave && store.exists() {
        book.load_from(&store)
            .with_context(|| format!("Failed to load {}", store.path().display()))?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Shell::new(&mut book, &store, &config, stdin.lock(), stdout.lock()).run();
    if let Err(e) = &session {
        error!("Shell stopped on I/O error: {}", e);
    }

    // Save whatever the session changed, even if it ended on an I/O error.
    if config.autosave {
        book.save_to(&store)
            .with_context(|| format!("Failed to save {}", store.path().display()))?;
        info!("Saved address book to {}", store.path().display());
    }

    session.context("Interactive session failed")?;

    info!("Address book shutdown complete");
    Ok(())
}
