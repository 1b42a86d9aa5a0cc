use address_book::error::{StorageError, StorageResult};
use address_book::models::Record;
use address_book::repositories::RecordStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock record store for testing.
///
/// Keeps the saved records in memory, tracks method calls for verification and
/// can be switched into a failing mode to exercise error paths.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRecordStore {
    records: Arc<Mutex<Option<Vec<Record>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockRecordStore {
    /// Create a new empty MockRecordStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let store = Self::new();
        *store.records.lock().unwrap() = Some(records);
        store
    }

    /// Make every subsequent save/load fail.
    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// Records saved so far, if any.
    pub fn stored(&self) -> Option<Vec<Record>> {
        self.records.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn failure(&self) -> Option<StorageError> {
        if *self.fail.lock().unwrap() {
            Some(StorageError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "mock failure"),
            })
        } else {
            None
        }
    }
}

impl RecordStore for MockRecordStore {
    fn save(&self, records: &[Record]) -> StorageResult<()> {
        self.track_call("save");
        if let Some(err) = self.failure() {
            return Err(err);
        }
        *self.records.lock().unwrap() = Some(records.to_vec());
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<Record>> {
        self.track_call("load");
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.records
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StorageError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "nothing saved"),
            })
    }

    fn exists(&self) -> bool {
        self.track_call("exists");
        self.records.lock().unwrap().is_some()
    }
}
