use std::cell::RefCell;
use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::StoreError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}
