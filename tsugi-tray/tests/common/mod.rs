//! Shared fixtures for the surface tests: recording port fakes and
//! collection builders.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tsugi_core::error::CoreError;
use tsugi_core::storage::MemoryStore;
use tsugi_core::traits::{
    CollectionSource, KeyValueStoreExt, Navigator, Notifier,
};
use tsugi_model::{
    CoverImage, EntryId, ListEntry, ListStatus, MediaCollection, MediaId,
    MediaList, MediaSummary, MediaTitle, QueueEntry,
};
use tsugi_tray::{SurfaceOptions, TrayApp};

/// Notifier fake recording every toast as (level, message).
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub toasts: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self, level: &str) -> Vec<String> {
        self.toasts
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.toasts.lock().unwrap().push(("success", message.to_string()));
    }

    fn info(&self, message: &str) {
        self.toasts.lock().unwrap().push(("info", message.to_string()));
    }

    fn error(&self, message: &str) {
        self.toasts.lock().unwrap().push(("error", message.to_string()));
    }
}

/// Navigator fake recording requested detail views.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub opened: Mutex<Vec<MediaId>>,
}

impl Navigator for RecordingNavigator {
    fn open_entry(&self, media_id: MediaId) {
        self.opened.lock().unwrap().push(media_id);
    }
}

/// Collection source returning a fixed result.
#[derive(Debug)]
pub struct StaticSource {
    pub result: Mutex<Result<MediaCollection, String>>,
}

impl StaticSource {
    pub fn ok(collection: MediaCollection) -> Self {
        StaticSource {
            result: Mutex::new(Ok(collection)),
        }
    }

    pub fn failing(message: &str) -> Self {
        StaticSource {
            result: Mutex::new(Err(message.to_string())),
        }
    }
}

#[async_trait]
impl CollectionSource for StaticSource {
    async fn fetch(
        &self,
        _bypass_cache: bool,
    ) -> Result<MediaCollection, CoreError> {
        self.result
            .lock()
            .unwrap()
            .clone()
            .map_err(CoreError::Collection)
    }
}

pub fn media(id: i64, title: &str) -> MediaSummary {
    MediaSummary {
        id: MediaId(id),
        title: Some(MediaTitle {
            user_preferred: Some(title.to_string()),
        }),
        cover_image: Some(CoverImage {
            large: Some(format!("{id}.png")),
            medium: None,
        }),
        season: None,
        season_year: None,
    }
}

pub fn list_entry(entry_id: i64, media_id: i64, title: &str) -> ListEntry {
    ListEntry {
        id: Some(EntryId(entry_id)),
        media: Some(media(media_id, title)),
    }
}

pub fn collection_of(
    lists: Vec<(ListStatus, Vec<ListEntry>)>,
) -> MediaCollection {
    MediaCollection {
        lists: lists
            .into_iter()
            .map(|(status, entries)| MediaList { status, entries })
            .collect(),
    }
}

/// Two planned shows, enough for most flows.
pub fn planned_collection() -> MediaCollection {
    collection_of(vec![(
        ListStatus::Planning,
        vec![list_entry(1, 10, "Naruto"), list_entry(2, 20, "One Piece")],
    )])
}

pub struct Harness {
    pub storage: Arc<MemoryStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub app: TrayApp,
}

/// Build an app over fresh fakes and the given collection source.
pub fn harness(source: Arc<dyn CollectionSource>) -> Harness {
    harness_with(Arc::new(MemoryStore::new()), source)
}

pub fn harness_with(
    storage: Arc<MemoryStore>,
    source: Arc<dyn CollectionSource>,
) -> Harness {
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let app = TrayApp::new(
        storage.clone(),
        source,
        notifier.clone(),
        navigator.clone(),
        SurfaceOptions::default(),
    );
    Harness {
        storage,
        notifier,
        navigator,
        app,
    }
}

/// Seed a persisted queue record the next SurfaceOpened will load.
pub fn seed_queue(storage: &MemoryStore, entries: &[(i64, &str)]) {
    let entries: Vec<QueueEntry> = entries
        .iter()
        .map(|(id, title)| QueueEntry::from_media(&media(*id, title), None))
        .collect();
    storage.set_json("watchOrderList", &entries).unwrap();
}

pub fn persisted_queue(storage: &MemoryStore) -> Vec<QueueEntry> {
    storage
        .get_json::<Vec<QueueEntry>>("watchOrderList")
        .unwrap()
        .unwrap_or_default()
}

pub fn queue_titles(app: &TrayApp) -> Vec<String> {
    app.queue_entries().iter().map(|e| e.title.clone()).collect()
}

pub fn pool_titles(app: &TrayApp) -> Vec<String> {
    app.state().pool.iter().map(|e| e.title.clone()).collect()
}
