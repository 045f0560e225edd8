use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::CoreError;
use crate::traits::KeyValueStore;

/// In-memory key-value store. Nothing survives the process; intended for
/// tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, CoreError> {
        let values = self
            .values
            .lock()
            .map_err(|_| CoreError::Storage("memory store poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CoreError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| CoreError::Storage("memory store poisoned".into()))?;
        values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| CoreError::Storage("memory store poisoned".into()))?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::KeyValueStoreExt;

    #[test]
    fn round_trips_typed_values() {
        let store = MemoryStore::new();
        assert!(store.get_json::<Vec<u32>>("missing").unwrap().is_none());

        store.set_json("numbers", &vec![1u32, 2, 3]).unwrap();
        let read: Vec<u32> = store.get_json("numbers").unwrap().unwrap();
        assert_eq!(read, vec![1, 2, 3]);

        store.remove("numbers").unwrap();
        assert!(store.get_json::<Vec<u32>>("numbers").unwrap().is_none());
    }
}
