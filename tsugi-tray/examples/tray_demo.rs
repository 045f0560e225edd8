//! Minimal embedding of the tray surface against the reference
//! adapters: file-backed storage, a canned collection source, and
//! stdout toasts. Run with `RUST_LOG=debug` for the surface's logs.

use std::sync::Arc;

use async_trait::async_trait;
use tsugi_core::error::CoreError;
use tsugi_core::storage::JsonFileStore;
use tsugi_core::traits::{CollectionSource, Navigator, Notifier};
use tsugi_model::{
    CoverImage, EntryId, ListEntry, ListStatus, MediaCollection, MediaId,
    MediaList, MediaSummary, MediaTitle,
};
use tsugi_tray::{Message, SurfaceOptions, TrayApp, TraySurface, UiEvent};

struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn success(&self, message: &str) {
        println!("[toast:success] {message}");
    }

    fn info(&self, message: &str) {
        println!("[toast:info] {message}");
    }

    fn error(&self, message: &str) {
        println!("[toast:error] {message}");
    }
}

struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn open_entry(&self, media_id: MediaId) {
        println!("[navigate] /entry?id={media_id}");
    }
}

struct DemoSource;

#[async_trait]
impl CollectionSource for DemoSource {
    async fn fetch(
        &self,
        _bypass_cache: bool,
    ) -> Result<MediaCollection, CoreError> {
        Ok(MediaCollection {
            lists: vec![MediaList {
                status: ListStatus::Planning,
                entries: vec![
                    planned(1, 101, "Mushishi"),
                    planned(2, 102, "Ping Pong the Animation"),
                    planned(3, 103, "Sousou no Frieren"),
                ],
            }],
        })
    }
}

fn planned(entry_id: i64, media_id: i64, title: &str) -> ListEntry {
    ListEntry {
        id: Some(EntryId(entry_id)),
        media: Some(MediaSummary {
            id: MediaId(media_id),
            title: Some(MediaTitle {
                user_preferred: Some(title.to_string()),
            }),
            cover_image: Some(CoverImage {
                large: Some(format!("https://img.example/{media_id}.png")),
                medium: None,
            }),
            season: None,
            season_year: None,
        }),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let store_path = std::env::temp_dir().join("tsugi-demo-store.json");
    println!("persisting to {}", store_path.display());

    let mut app = TrayApp::new(
        Arc::new(JsonFileStore::open(store_path)),
        Arc::new(DemoSource),
        Arc::new(StdoutNotifier),
        Arc::new(StdoutNavigator),
        SurfaceOptions::default(),
    );
    app.subscribe_render(|tree| {
        let mut nodes = 0;
        tree.walk(&mut |_| nodes += 1);
        println!("[render] {nodes} nodes");
    });

    let mut surface = TraySurface::new(app);
    surface.open();

    // Browse the planned list and queue the first candidate.
    surface.dispatch(Message::Ui(UiEvent::OpenAddView));
    surface.pump().await;
    if let Some(first) = surface.app().state().pool.first() {
        let media_id = first.media_id;
        surface.dispatch(Message::Ui(UiEvent::AddCandidate(media_id)));
    }
    surface.dispatch(Message::Ui(UiEvent::OpenMainView));

    let titles: Vec<_> = surface
        .app()
        .queue_entries()
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    println!("watch order: {titles:?}");
}
