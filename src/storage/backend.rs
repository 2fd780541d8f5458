//! Key/value backends holding the serialized lists.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::{ListKey, StorageError};

/// Synchronous string storage addressed by [`ListKey`].
pub trait KeyValueStorage {
    /// Returns `Ok(None)` when nothing has been stored under `key` yet.
    fn get(&self, key: ListKey) -> Result<Option<String>, StorageError>;

    /// Overwrites whatever is stored under `key`.
    fn set(&self, key: ListKey, value: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<data_dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Returns the full path for a key.
    pub fn path(&self, key: ListKey) -> PathBuf {
        self.data_dir.join(key.filename())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: ListKey) -> Result<Option<String>, StorageError> {
        let path = self.path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(path, e)),
        }
    }

    fn set(&self, key: ListKey, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::IoError(self.data_dir.clone(), e))?;

        let path = self.path(key);
        fs::write(&path, value).map_err(|e| StorageError::IoError(path, e))
    }
}
