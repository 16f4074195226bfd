use super::storage::Storage;
use crate::agent::Table;
use crate::error::StorageError;
use std::path::PathBuf;

/// Value tables as JSON files, one per model name,
/// under a single directory: `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct Disk {
    dir: PathBuf,
}

impl Disk {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
    /// path to file on disk
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }
    /// check if file exists on disk
    pub fn done(&self, name: &str) -> bool {
        std::fs::metadata(self.path(name)).is_ok()
    }
}

impl Storage for Disk {
    fn load(&self, name: &str) -> Result<Option<Table>, StorageError> {
        let path = self.path(name);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("model {} not found, starting from scratch", name);
                return Ok(None);
            }
            Err(source) => return Err(StorageError::Read { path, source }),
        };
        let table = serde_json::from_slice::<Table>(&bytes)
            .map_err(|source| StorageError::Decode { path: path.clone(), source })?;
        log::info!("model {} loaded from {} ({} states)", name, path.display(), table.len());
        Ok(Some(table))
    }

    fn save(&self, name: &str, table: &Table) -> Result<(), StorageError> {
        let path = self.path(name);
        let json = serde_json::to_vec(table).map_err(|source| StorageError::Encode {
            name: name.to_string(),
            source,
        })?;
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: self.dir.clone(),
            source,
        })?;
        std::fs::write(&path, json).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("model {} saved to {} ({} states)", name, path.display(), table.len());
        Ok(())
    }
}
