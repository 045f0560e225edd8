//! Effect-runtime behavior: spawned fetches, debounce timers, and the
//! render subscription.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::*;
use tsugi_model::MediaId;
use tsugi_tray::{Message, TraySurface, UiEvent};

#[tokio::test(start_paused = true)]
async fn fetch_effect_lands_as_a_message() {
    let h = harness(Arc::new(StaticSource::ok(planned_collection())));
    let mut surface = TraySurface::new(h.app);
    surface.open();

    surface.dispatch(Message::Ui(UiEvent::OpenAddView));
    assert!(surface.app().state().loading);

    // The spawned fetch resolves and is delivered through the channel.
    assert!(surface.pump().await);
    assert!(!surface.app().state().loading);
    assert_eq!(pool_titles(surface.app()), ["Naruto", "One Piece"]);
}

#[tokio::test(start_paused = true)]
async fn fetch_failure_surfaces_through_the_runtime() {
    let h = harness(Arc::new(StaticSource::failing("connection reset")));
    let notifier = h.notifier.clone();
    let mut surface = TraySurface::new(h.app);
    surface.open();

    surface.dispatch(Message::Ui(UiEvent::OpenAddView));
    assert!(surface.pump().await);

    assert!(!surface.app().state().loading);
    assert_eq!(
        notifier.messages("error"),
        ["Failed to load your anime lists."]
    );
}

#[tokio::test(start_paused = true)]
async fn rapid_filter_edits_coalesce_to_the_latest_pass() {
    let h = harness(Arc::new(StaticSource::ok(planned_collection())));
    let mut surface = TraySurface::new(h.app);
    surface.open();
    surface.dispatch(Message::Ui(UiEvent::OpenAddView));
    surface.pump().await;

    surface.dispatch(Message::Ui(UiEvent::SearchChanged("one".into())));
    surface.dispatch(Message::Ui(UiEvent::SearchChanged("naruto".into())));

    // Both timers fire; the first generation is stale and dropped.
    surface.pump().await;
    assert_eq!(pool_titles(surface.app()), ["Naruto", "One Piece"]);
    surface.pump().await;
    assert_eq!(pool_titles(surface.app()), ["Naruto"]);
}

#[tokio::test(start_paused = true)]
async fn host_sender_feeds_events_into_the_surface() {
    let h = harness(Arc::new(StaticSource::ok(planned_collection())));
    seed_queue(&h.storage, &[(10, "Naruto")]);
    let navigator = h.navigator.clone();
    let mut surface = TraySurface::new(h.app);
    surface.open();

    let sender = surface.sender();
    sender
        .send(Message::Ui(UiEvent::OpenEntry(MediaId(10))))
        .unwrap();
    surface.pump().await;
    assert_eq!(*navigator.opened.lock().unwrap(), vec![MediaId(10)]);
}

#[test]
fn render_subscriber_is_notified_on_every_message() {
    let mut h = harness(Arc::new(StaticSource::ok(planned_collection())));
    let renders = Arc::new(AtomicUsize::new(0));
    let counter = renders.clone();
    h.app.subscribe_render(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    h.app.update(Message::SurfaceOpened);
    h.app.update(Message::Ui(UiEvent::RequestClearQueue));
    h.app.update(Message::Ui(UiEvent::CancelClearQueue));
    assert_eq!(renders.load(Ordering::SeqCst), 3);
}
