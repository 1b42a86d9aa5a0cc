use crate::error::StorageResult;
use crate::models::Record;

/// Storage backend for the full record list.
///
/// Every call moves the whole list: `save` replaces whatever was stored and
/// `load` returns everything, in insertion order.
pub trait RecordStore {
    /// Persist `records`, overwriting any previous contents.
    fn save(&self, records: &[Record]) -> StorageResult<()>;

    /// Read back every stored record.
    fn load(&self) -> StorageResult<Vec<Record>>;

    /// Whether anything has been stored yet.
    fn exists(&self) -> bool;
}
