//! Auto-removal reconciliation.
//!
//! When the feature is enabled, every fresh collection snapshot is
//! diffed against the queue: entries whose media identity has moved into
//! the "currently watching" status no longer belong in a watch-next list
//! and are removed. Re-running with an equivalent snapshot removes
//! nothing, so the host may deliver duplicate refresh events freely.

use std::collections::HashSet;

use tracing::debug;
use tsugi_model::{ListStatus, MediaCollection, MediaId, QueueEntry};

use crate::error::CoreError;
use crate::queue::QueueStore;

/// Media identities present in the "currently watching" list(s) of a
/// snapshot.
pub fn watching_ids(collection: &MediaCollection) -> HashSet<MediaId> {
    collection
        .lists_with_status(ListStatus::Current)
        .flat_map(|list| list.entries.iter())
        .filter_map(|entry| entry.media.as_ref())
        .map(|media| media.id)
        .collect()
}

/// Remove queued entries that are now being watched, per the snapshot.
///
/// Does nothing when `enabled` is false. The queue is persisted once,
/// and only when at least one entry was removed; removed entries are
/// returned so the caller can notify the user about each.
pub fn reconcile_queue(
    queue: &mut QueueStore,
    collection: &MediaCollection,
    enabled: bool,
) -> Result<Vec<QueueEntry>, CoreError> {
    if !enabled {
        return Ok(Vec::new());
    }
    let watching = watching_ids(collection);
    if watching.is_empty() {
        return Ok(Vec::new());
    }
    let removed = queue.retain_not_in(&watching)?;
    if !removed.is_empty() {
        debug!(count = removed.len(), "auto-removed entries now being watched");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::traits::KeyValueStoreExt;
    use std::sync::Arc;
    use tsugi_model::{
        EntryId, ListEntry, MediaList, MediaSummary, MediaTitle,
    };

    fn media(id: i64, title: &str) -> MediaSummary {
        MediaSummary {
            id: MediaId(id),
            title: Some(MediaTitle {
                user_preferred: Some(title.to_string()),
            }),
            cover_image: None,
            season: None,
            season_year: None,
        }
    }

    fn watching_snapshot(ids: &[i64]) -> MediaCollection {
        MediaCollection {
            lists: vec![MediaList {
                status: ListStatus::Current,
                entries: ids
                    .iter()
                    .map(|id| ListEntry {
                        id: Some(EntryId(*id)),
                        media: Some(media(*id, "x")),
                    })
                    .collect(),
            }],
        }
    }

    fn queue_of(ids: &[i64]) -> (Arc<MemoryStore>, QueueStore) {
        let storage = Arc::new(MemoryStore::new());
        let mut queue = QueueStore::new(storage.clone(), "queue");
        for id in ids {
            queue
                .append(QueueEntry::from_media(&media(*id, "x"), None))
                .unwrap();
        }
        (storage, queue)
    }

    #[test]
    fn removes_watching_entries_exactly_once() {
        let (storage, mut queue) = queue_of(&[1, 2, 3]);
        let snapshot = watching_snapshot(&[2]);

        let removed = reconcile_queue(&mut queue, &snapshot, true).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].media_id, MediaId(2));
        assert_eq!(queue.len(), 2);
        assert_eq!(
            storage
                .get_json::<Vec<QueueEntry>>("queue")
                .unwrap()
                .unwrap(),
            queue.entries()
        );

        // Idempotent: an equivalent snapshot removes nothing further.
        let removed = reconcile_queue(&mut queue, &snapshot, true).unwrap();
        assert!(removed.is_empty());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn disabled_leaves_the_queue_untouched() {
        let (_, mut queue) = queue_of(&[1, 2]);
        let snapshot = watching_snapshot(&[1, 2]);
        let removed = reconcile_queue(&mut queue, &snapshot, false).unwrap();
        assert!(removed.is_empty());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn snapshot_without_watching_list_is_a_noop() {
        let (_, mut queue) = queue_of(&[1]);
        let snapshot = MediaCollection::default();
        let removed = reconcile_queue(&mut queue, &snapshot, true).unwrap();
        assert!(removed.is_empty());
    }
}
