use std::marker::PhantomData;
use uuid::Uuid;

use super::{KeyValueStorage, ListKey, StorageError};
use crate::models::Record;

/// A newest-first list of records persisted whole under one key.
pub struct ListStore<R, S> {
    key: ListKey,
    storage: S,
    _record: PhantomData<R>,
}

impl<R: Record, S: KeyValueStorage> ListStore<R, S> {
    pub fn new(key: ListKey, storage: S) -> Self {
        Self {
            key,
            storage,
            _record: PhantomData,
        }
    }

    /// Reads the whole list.
    ///
    /// Never fails: a missing, unreadable or unparsable value is treated as an
    /// empty list. Records stored without an `id` are given one and the list
    /// is written back at once, so the ids stay the same on later loads.
    pub fn load(&self) -> Vec<R> {
        let raw = match self.storage.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", self.key.as_str(), e);
                return Vec::new();
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    "Ignoring unparsable data under {}: {}",
                    self.key.as_str(),
                    e
                );
                return Vec::new();
            }
        };
        let missing_ids = values.iter().filter(|v| v.get("id").is_none()).count();

        let records: Vec<R> = match values
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()
        {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "Ignoring unparsable data under {}: {}",
                    self.key.as_str(),
                    e
                );
                return Vec::new();
            }
        };

        if missing_ids > 0 {
            match self.save(&records) {
                Ok(()) => tracing::info!(
                    "Assigned ids to {} record(s) under {}",
                    missing_ids,
                    self.key.as_str()
                ),
                Err(e) => tracing::warn!(
                    "Failed to store assigned ids under {}: {}",
                    self.key.as_str(),
                    e
                ),
            }
        }

        records
    }

    /// Replaces the stored list.
    pub fn save(&self, records: &[R]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records)
            .map_err(|e| StorageError::EncodeError(self.key.as_str(), e))?;
        self.storage.set(self.key, &json)?;
        tracing::debug!("Saved {} record(s) to {}", records.len(), self.key.as_str());
        Ok(())
    }

    /// Inserts a record at the front of the list.
    pub fn prepend(&self, record: R) -> Result<(), StorageError> {
        let mut records = self.load();
        records.insert(0, record);
        self.save(&records)
    }

    /// Removes the record at `position`.
    ///
    /// An out-of-range position leaves storage untouched and returns `None`.
    pub fn remove_at(&self, position: usize) -> Result<Option<R>, StorageError> {
        let mut records = self.load();
        if position >= records.len() {
            tracing::debug!(
                "Position {} out of range for {} ({} record(s))",
                position,
                self.key.as_str(),
                records.len()
            );
            return Ok(None);
        }
        let removed = records.remove(position);
        self.save(&records)?;
        Ok(Some(removed))
    }

    /// Removes the record with the given id, if it is still stored.
    pub fn remove_by_id(&self, id: Uuid) -> Result<Option<R>, StorageError> {
        let mut records = self.load();
        match records.iter().position(|r| r.id() == id) {
            Some(position) => {
                let removed = records.remove(position);
                self.save(&records)?;
                Ok(Some(removed))
            }
            None => Ok(None),
        }
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.save(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, WaterCondition};
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::TempDir;

    fn entry(name: &str) -> Entry {
        Entry::new(name, "fever", WaterCondition::Clean)
    }

    fn names(records: &[Entry]) -> Vec<&str> {
        records.iter().map(|e| e.name.as_str()).collect()
    }

    fn memory_store() -> (ListStore<Entry, MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (ListStore::new(ListKey::Entries, storage.clone()), storage)
    }

    #[test]
    fn test_load_missing_is_empty() {
        let (store, _) = memory_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_is_empty() {
        let (store, storage) = memory_store();
        storage.set(ListKey::Entries, "{not json").unwrap();
        assert!(store.load().is_empty());

        storage.set(ListKey::Entries, "null").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let (store, _) = memory_store();
        store.prepend(entry("first")).unwrap();
        store.prepend(entry("second")).unwrap();
        let prior = store.load();

        let newest = entry("third");
        store.prepend(newest.clone()).unwrap();

        let loaded = store.load();
        assert_eq!(loaded[0], newest);
        assert_eq!(&loaded[1..], &prior[..]);
        assert_eq!(names(&loaded), vec!["third", "second", "first"]);
    }

    #[test]
    fn test_remove_at_keeps_relative_order() {
        let (store, _) = memory_store();
        store
            .save(&[entry("a"), entry("b"), entry("c")])
            .unwrap();

        let removed = store.remove_at(1).unwrap().unwrap();

        assert_eq!(removed.name, "b");
        assert_eq!(names(&store.load()), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let (store, storage) = memory_store();
        store.save(&[entry("a"), entry("b")]).unwrap();
        let before = storage.get(ListKey::Entries).unwrap();

        assert!(store.remove_at(2).unwrap().is_none());
        assert!(store.remove_at(usize::MAX).unwrap().is_none());

        assert_eq!(storage.get(ListKey::Entries).unwrap(), before);
    }

    #[test]
    fn test_remove_at_on_empty_does_not_write() {
        let (store, storage) = memory_store();
        assert!(store.remove_at(0).unwrap().is_none());
        assert!(storage.get(ListKey::Entries).unwrap().is_none());
    }

    #[test]
    fn test_remove_by_id() {
        let (store, _) = memory_store();
        let keep = entry("keep");
        let drop = entry("drop");
        store.save(&[keep.clone(), drop.clone()]).unwrap();

        assert_eq!(store.remove_by_id(drop.id).unwrap(), Some(drop.clone()));
        assert_eq!(store.load(), vec![keep]);
        assert!(store.remove_by_id(drop.id).unwrap().is_none());
    }

    #[test]
    fn test_clear_empties_list() {
        let (store, _) = memory_store();
        store.save(&[entry("a"), entry("b")]).unwrap();

        store.clear().unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_backed_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store: ListStore<Entry, _> =
            ListStore::new(ListKey::Entries, FileStorage::new(temp_dir.path().into()));

        store.prepend(entry("disk")).unwrap();

        let reopened: ListStore<Entry, _> =
            ListStore::new(ListKey::Entries, FileStorage::new(temp_dir.path().into()));
        assert_eq!(names(&reopened.load()), vec!["disk"]);

        let raw = std::fs::read_to_string(temp_dir.path().join("shm_entries_v1.json")).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"water\":\"Clean\""));
    }

    #[test]
    fn test_records_without_ids_keep_assigned_ids() {
        let (store, storage) = memory_store();
        storage
            .set(
                ListKey::Entries,
                r#"[{"name":"Old","symptoms":"cough","water":"Clean","date":"1/2/2024, 3:04:05 PM"},
                    {"name":"Older","symptoms":"rash","water":"Dirty","date":"1/1/2024, 8:00:00 AM"}]"#,
            )
            .unwrap();

        let first = store.load();
        let second = store.load();

        assert_eq!(names(&first), vec!["Old", "Older"]);
        assert_eq!(first, second);
        let raw = storage.get(ListKey::Entries).unwrap().unwrap();
        assert!(raw.contains(&first[0].id.to_string()));
        assert!(raw.contains(&first[1].id.to_string()));
    }

    #[test]
    fn test_remove_at_on_records_without_ids() {
        let (store, storage) = memory_store();
        storage
            .set(
                ListKey::Entries,
                r#"[{"name":"a","symptoms":"x","water":"Clean","date":"d"},{"name":"b","symptoms":"y","water":"Clean","date":"d"}]"#,
            )
            .unwrap();

        let removed = store.remove_at(0).unwrap().unwrap();

        assert_eq!(removed.name, "a");
        assert_eq!(names(&store.load()), vec!["b"]);
    }

    #[test]
    fn test_record_with_missing_field_discards_list() {
        let (store, storage) = memory_store();
        storage
            .set(
                ListKey::Entries,
                r#"[{"name":"x","water":"Clean","date":"d"}]"#,
            )
            .unwrap();
        assert!(store.load().is_empty());
    }
}
