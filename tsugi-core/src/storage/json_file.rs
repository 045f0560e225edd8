use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;
use tracing::warn;

use crate::error::CoreError;
use crate::traits::KeyValueStore;

/// File-backed key-value store persisting the whole key space as one
/// JSON object. Every `set`/`remove` rewrites the file, matching the
/// whole-value-replace contract of the storage port.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<HashMap<String, Value>>,
}

impl JsonFileStore {
    /// Open a store at `path`. A missing file starts empty; an unreadable
    /// or malformed file is treated the same way, with a warning, so a
    /// corrupt store never blocks the surface from loading.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(map) => map,
                Err(err) => {
                    warn!(path = %path.display(), %err, "discarding malformed store file");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                HashMap::new()
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read store file");
                HashMap::new()
            }
        };
        JsonFileStore {
            path,
            values: Mutex::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, values: &HashMap<String, Value>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(values)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, CoreError> {
        let values = self
            .values
            .lock()
            .map_err(|_| CoreError::Storage("file store poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CoreError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| CoreError::Storage("file store poisoned".into()))?;
        values.insert(key.to_string(), value);
        self.flush(&values)
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| CoreError::Storage("file store poisoned".into()))?;
        values.remove(key);
        self.flush(&values)
    }
}
