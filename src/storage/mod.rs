//! Persistence for the report and alert lists.
//!
//! Each list lives under its own key as a single JSON array. Every mutation
//! loads the whole array, changes it in memory and writes the whole array
//! back. There is no locking: two processes writing the same key at once can
//! lose an update (last writer wins).

mod backend;
mod list_store;
#[cfg(test)]
mod memory;

pub use backend::{FileStorage, KeyValueStorage};
pub use list_store::ListStore;
#[cfg(test)]
pub use memory::MemoryStorage;

use std::io;
use std::path::PathBuf;

/// Keys under which the lists are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    Entries,
    Alerts,
}

impl ListKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKey::Entries => "shm_entries_v1",
            ListKey::Alerts => "shm_alerts_v1",
        }
    }

    /// Returns the filename used by file-backed storage.
    pub fn filename(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

/// Errors that can occur while reading or writing a stored list.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error reading or writing a file.
    IoError(PathBuf, io::Error),
    /// The list could not be serialized.
    EncodeError(&'static str, serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(path, e) => {
                write!(f, "I/O error for {}: {}", path.display(), e)
            }
            StorageError::EncodeError(key, e) => {
                write!(f, "Failed to encode list '{}': {}", key, e)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(_, e) => Some(e),
            StorageError::EncodeError(_, e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_key_names() {
        assert_eq!(ListKey::Entries.as_str(), "shm_entries_v1");
        assert_eq!(ListKey::Alerts.as_str(), "shm_alerts_v1");
        assert_eq!(ListKey::Alerts.filename(), "shm_alerts_v1.json");
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::IoError(
            PathBuf::from("/tmp/x.json"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/x.json"));
        assert!(err.to_string().contains("denied"));
    }
}
