use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{KeyValueStorage, ListKey, StorageError};

/// In-process storage. Clones share the same cells.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    cells: Rc<RefCell<HashMap<&'static str, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: ListKey) -> Result<Option<String>, StorageError> {
        Ok(self.cells.borrow().get(key.as_str()).cloned())
    }

    fn set(&self, key: ListKey, value: &str) -> Result<(), StorageError> {
        self.cells
            .borrow_mut()
            .insert(key.as_str(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clones_share_state() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.set(ListKey::Alerts, "[1]").unwrap();
        assert_eq!(b.get(ListKey::Alerts).unwrap().as_deref(), Some("[1]"));
        assert!(b.get(ListKey::Entries).unwrap().is_none());
    }
}
