use super::storage::Storage;
use crate::agent::Table;
use crate::error::StorageError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local storage. Tables live as long as the value does.
#[derive(Debug, Default)]
pub struct Memory(Mutex<HashMap<String, Table>>);

impl Memory {
    pub fn names(&self) -> Vec<String> {
        let mut names = self.tables().keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }
    fn tables(&self) -> std::sync::MutexGuard<'_, HashMap<String, Table>> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for Memory {
    fn load(&self, name: &str) -> Result<Option<Table>, StorageError> {
        Ok(self.tables().get(name).cloned())
    }
    fn save(&self, name: &str, table: &Table) -> Result<(), StorageError> {
        self.tables().insert(name.to_string(), table.clone());
        Ok(())
    }
}
