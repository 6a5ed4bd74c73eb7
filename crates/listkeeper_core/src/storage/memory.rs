use super::{KeyValueStorage, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Ephemeral namespace kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryNamespace {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written so far.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryNamespace {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
