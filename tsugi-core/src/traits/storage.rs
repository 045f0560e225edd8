//! Persistent key-value storage port.
//!
//! The host guarantees atomic, durable whole-value writes; callers treat
//! `set` as fire-and-forget beyond logging a failure.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CoreError;

/// Key-value storage of JSON values under fixed keys.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>, CoreError>;

    /// Replace the whole value stored under `key`.
    fn set(&self, key: &str, value: Value) -> Result<(), CoreError>;

    /// Delete the value stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Typed convenience layer over [`KeyValueStore`].
pub trait KeyValueStoreExt {
    /// Read and deserialize the value under `key`.
    fn get_json<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, CoreError>;

    /// Serialize and store `value` under `key`.
    fn set_json<T: Serialize>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), CoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {
    fn get_json<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, CoreError> {
        match self.get(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), CoreError> {
        self.set(key, serde_json::to_value(value)?)
    }
}
