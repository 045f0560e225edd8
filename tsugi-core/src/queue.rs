//! The persisted watch-next queue.
//!
//! `QueueStore` keeps the ordered queue in memory and writes the whole
//! queue back through the storage port after every mutation, so the
//! persisted record never diverges from what the user sees.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};
use tsugi_model::{MediaId, QueueEntry};

use crate::error::CoreError;
use crate::traits::{KeyValueStore, KeyValueStoreExt};

/// Ordered watch-next queue backed by persistent key-value storage.
pub struct QueueStore {
    entries: Vec<QueueEntry>,
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for QueueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueStore")
            .field("key", &self.key)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl QueueStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        QueueStore {
            entries: Vec::new(),
            storage,
            key: key.into(),
        }
    }

    /// Replace the in-memory queue from storage. A missing or malformed
    /// persisted record yields the empty queue rather than an error.
    pub fn load(&mut self) {
        match self.storage.get_json::<Vec<QueueEntry>>(&self.key) {
            Ok(Some(entries)) => self.entries = entries,
            Ok(None) => self.entries = Vec::new(),
            Err(err) => {
                warn!(key = %self.key, %err, "discarding unreadable queue record");
                self.entries = Vec::new();
            }
        }
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, media_id: MediaId) -> bool {
        self.entries.iter().any(|e| e.media_id == media_id)
    }

    /// Media identities currently queued, for candidate-pool exclusion.
    pub fn queued_ids(&self) -> HashSet<MediaId> {
        self.entries.iter().map(|e| e.media_id).collect()
    }

    /// Append `entry` to the end of the queue. Silently a no-op when the
    /// media identity is already queued; returns whether the queue grew.
    pub fn append(&mut self, entry: QueueEntry) -> Result<bool, CoreError> {
        if self.contains(entry.media_id) {
            debug!(media_id = %entry.media_id, "skipping duplicate append");
            return Ok(false);
        }
        self.entries.push(entry);
        self.persist()?;
        Ok(true)
    }

    /// Remove the entry with the given media identity, if present.
    pub fn remove(
        &mut self,
        media_id: MediaId,
    ) -> Result<Option<QueueEntry>, CoreError> {
        let Some(index) =
            self.entries.iter().position(|e| e.media_id == media_id)
        else {
            return Ok(None);
        };
        let removed = self.entries.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Swap the entry at `index` with its predecessor. No-op on the first
    /// entry or an out-of-range index; returns whether anything moved.
    pub fn move_up(&mut self, index: usize) -> Result<bool, CoreError> {
        if index == 0 || index >= self.entries.len() {
            return Ok(false);
        }
        self.entries.swap(index - 1, index);
        self.persist()?;
        Ok(true)
    }

    /// Swap the entry at `index` with its successor. No-op on the last
    /// entry or an out-of-range index; returns whether anything moved.
    pub fn move_down(&mut self, index: usize) -> Result<bool, CoreError> {
        if self.entries.len() < 2 || index >= self.entries.len() - 1 {
            return Ok(false);
        }
        self.entries.swap(index, index + 1);
        self.persist()?;
        Ok(true)
    }

    /// Replace the queue with the empty sequence. Callers gate this
    /// behind explicit confirmation.
    pub fn clear(&mut self) -> Result<(), CoreError> {
        self.entries.clear();
        self.persist()
    }

    /// Remove every entry whose media identity is in `ids`, preserving
    /// the order of survivors. Persists once, and only when at least one
    /// entry was removed. Returns the removed entries in queue order.
    pub fn retain_not_in(
        &mut self,
        ids: &HashSet<MediaId>,
    ) -> Result<Vec<QueueEntry>, CoreError> {
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            if ids.contains(&entry.media_id) {
                removed.push(entry.clone());
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            self.persist()?;
        }
        Ok(removed)
    }

    fn persist(&self) -> Result<(), CoreError> {
        self.storage.set_json(&self.key, &self.entries)
    }
}
