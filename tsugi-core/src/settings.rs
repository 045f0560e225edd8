//! Persisted surface settings, stored independently from the queue.

use std::sync::Arc;

use tracing::warn;
use tsugi_model::TraySettings;

use crate::error::CoreError;
use crate::traits::{KeyValueStore, KeyValueStoreExt};

/// Settings record backed by the storage port.
pub struct SettingsStore {
    settings: TraySettings,
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("key", &self.key)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl SettingsStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        SettingsStore {
            settings: TraySettings::default(),
            storage,
            key: key.into(),
        }
    }

    /// Reload from storage. A malformed persisted value is ignored and
    /// the defaults apply, so the surface always loads.
    pub fn load(&mut self) {
        match self.storage.get_json::<TraySettings>(&self.key) {
            Ok(Some(settings)) => self.settings = settings,
            Ok(None) => self.settings = TraySettings::default(),
            Err(err) => {
                warn!(key = %self.key, %err, "ignoring malformed settings record");
                self.settings = TraySettings::default();
            }
        }
    }

    pub fn settings(&self) -> TraySettings {
        self.settings
    }

    pub fn auto_remove(&self) -> bool {
        self.settings.auto_remove
    }

    /// Flip the auto-removal flag, persisting immediately.
    pub fn set_auto_remove(&mut self, enabled: bool) -> Result<(), CoreError> {
        self.settings.auto_remove = enabled;
        self.storage.set_json(&self.key, &self.settings)
    }
}
