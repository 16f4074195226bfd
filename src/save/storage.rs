use crate::agent::Table;
use crate::error::StorageError;

/// Key-value store for value tables, keyed by model name.
///
/// A model that was never saved loads as `Ok(None)`; only a store that
/// exists but cannot be read, decoded, or written is an error.
/// Both calls move the whole table at once.
pub trait Storage: Send + Sync {
    /// read a table, None if absent
    fn load(&self, name: &str) -> Result<Option<Table>, StorageError>;
    /// write a table, replacing any previous one
    fn save(&self, name: &str, table: &Table) -> Result<(), StorageError>;
}
