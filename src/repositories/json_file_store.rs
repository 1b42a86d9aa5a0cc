use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use crate::repositories::traits::RecordStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Record store backed by a single JSON file.
///
/// The file holds a JSON array of records. Saving truncates and rewrites the
/// whole file; there is no partial-write protection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. Nothing is touched until the
    /// first save or load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordStore for JsonFileStore {
    fn save(&self, records: &[Record]) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        tracing::debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<Record>> {
        let json = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let records: Vec<Record> = serde_json::from_str(&json)?;
        tracing::debug!("Read {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}
