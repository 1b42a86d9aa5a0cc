//! Ordered, in-memory collection of contact records.

use super::pages::Pages;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use crate::repositories::{JsonFileStore, RecordStore};
use crate::search::{PhoneMatch, RecordMatcher};
use std::path::Path;

/// The address book: records kept in insertion order.
///
/// Names are not unique. Lookups by name act on the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicates are accepted.
    pub fn add_record(&mut self, record: Record) {
        tracing::debug!("Adding record: {}", record.name);
        self.records.push(record);
    }

    /// Remove the first record equal to `record` and return it.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::NotFound` if no record is equal.
    pub fn remove_record(&mut self, record: &Record) -> AddressBookResult<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r == record)
            .ok_or_else(|| AddressBookError::NotFound(record.name.to_string()))?;

        tracing::debug!("Removing record: {}", record.name);
        Ok(self.records.remove(index))
    }

    /// Remove the first record named exactly `name` and return it.
    pub fn remove_by_name(&mut self, name: &str) -> AddressBookResult<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r.name.as_str() == name)
            .ok_or_else(|| AddressBookError::NotFound(name.to_string()))?;

        tracing::debug!("Removing record: {}", name);
        Ok(self.records.remove(index))
    }

    /// First record named exactly `name`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name.as_str() == name)
    }

    /// Mutable access to the first record named exactly `name`.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name.as_str() == name)
    }

    /// Records whose name contains `query` or that store `query` as one of
    /// their phone numbers, in insertion order.
    ///
    /// Phone numbers must match exactly; use [`search_with`](Self::search_with)
    /// with [`PhoneMatch::Substring`] to match partial numbers.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.search_with(query, PhoneMatch::Exact)
    }

    /// Like [`search`](Self::search) with an explicit phone matching policy.
    pub fn search_with(&self, query: &str, phone_match: PhoneMatch) -> Vec<&Record> {
        let matcher = RecordMatcher::new(query, phone_match);
        let results: Vec<&Record> = self.records.iter().filter(|r| matcher.matches(r)).collect();
        tracing::debug!(
            "Search '{}' ({} phone match): {} of {} records",
            query,
            phone_match,
            results.len(),
            self.records.len()
        );
        results
    }

    /// Page through a snapshot of the current records.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidPageSize` when `page_size` is 0.
    pub fn iterator(&self, page_size: usize) -> AddressBookResult<Pages> {
        if page_size == 0 {
            return Err(AddressBookError::InvalidPageSize);
        }
        Ok(Pages::new(self.records.clone(), page_size))
    }

    /// Write every record to `store`, replacing its previous contents.
    pub fn save_to(&self, store: &dyn RecordStore) -> AddressBookResult<()> {
        store.save(&self.records)?;
        tracing::info!("Saved {} records", self.records.len());
        Ok(())
    }

    /// Replace all records with the contents of `store`.
    ///
    /// On error the current records are left as they were.
    pub fn load_from(&mut self, store: &dyn RecordStore) -> AddressBookResult<()> {
        self.records = store.load()?;
        tracing::info!("Loaded {} records", self.records.len());
        Ok(())
    }

    /// Save to a JSON file at `path`, truncating it first.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> AddressBookResult<()> {
        self.save_to(&JsonFileStore::new(path.as_ref()))
    }

    /// Replace all records with those in the JSON file at `path`.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> AddressBookResult<()> {
        self.load_from(&JsonFileStore::new(path.as_ref()))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
