//! Rendered-tree assertions for both screens.

mod common;

use std::sync::Arc;

use common::*;
use tsugi_model::MediaId;
use tsugi_tray::{Message, Node, Selector, TextField, UiEvent};

fn has_toggle(tree: &Node, expect_on: bool) -> bool {
    let mut found = false;
    tree.walk(&mut |node| {
        if let Node::Toggle { on, .. } = node {
            found = found || *on == expect_on;
        }
    });
    found
}

#[test]
fn empty_queue_renders_placeholder_without_remove_all() {
    let mut h = harness(Arc::new(StaticSource::ok(planned_collection())));
    h.app.update(Message::SurfaceOpened);

    let tree = h.app.tree();
    assert!(tree.texts().contains(&"Your list is empty."));
    assert!(tree.find_button(&UiEvent::RequestClearQueue).is_none());
    assert!(tree.find_button(&UiEvent::OpenAddView).is_some());
    assert!(has_toggle(tree, false));
}

#[test]
fn queue_rows_number_entries_and_disable_boundary_moves() {
    let mut h = harness(Arc::new(StaticSource::ok(planned_collection())));
    seed_queue(&h.storage, &[(1, "A"), (2, "B"), (3, "C")]);
    h.app.update(Message::SurfaceOpened);

    let tree = h.app.tree();
    let texts = tree.texts();
    for expected in ["1", "2", "3", "A", "B", "C"] {
        assert!(texts.contains(&expected), "missing {expected}");
    }
    assert!(tree.find_button(&UiEvent::RequestClearQueue).is_some());

    let up_disabled = tree
        .buttons()
        .iter()
        .filter_map(|(_, event, disabled)| match event {
            UiEvent::MoveEntryUp(i) => Some((*i, *disabled)),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(up_disabled, [(0, true), (1, false), (2, false)]);

    let down_disabled = tree
        .buttons()
        .iter()
        .filter_map(|(_, event, disabled)| match event {
            UiEvent::MoveEntryDown(i) => Some((*i, *disabled)),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(down_disabled, [(0, false), (1, false), (2, true)]);

    // Every row is clickable through to its detail view.
    assert!(tree.find_button(&UiEvent::OpenEntry(MediaId(2))).is_some());
}

#[test]
fn clear_confirmation_overlays_the_main_view() {
    let mut h = harness(Arc::new(StaticSource::ok(planned_collection())));
    seed_queue(&h.storage, &[(1, "A")]);
    h.app.update(Message::SurfaceOpened);

    assert!(!h.app.tree().texts().contains(&"Are you sure?"));
    h.app.update(Message::Ui(UiEvent::RequestClearQueue));

    let tree = h.app.tree();
    assert!(tree.texts().contains(&"Are you sure?"));
    assert!(tree.find_button(&UiEvent::ConfirmClearQueue).is_some());
    assert!(tree.find_button(&UiEvent::CancelClearQueue).is_some());

    // The queue stays visible beneath the overlay.
    assert!(tree.texts().contains(&"A"));
}

#[test]
fn add_view_shows_loading_then_candidates() {
    let mut h = harness(Arc::new(StaticSource::ok(planned_collection())));
    h.app.update(Message::SurfaceOpened);
    h.app.update(Message::Ui(UiEvent::OpenAddView));

    let tree = h.app.tree();
    assert!(tree.texts().contains(&"Loading your anime lists..."));
    assert!(tree.find_button(&UiEvent::OpenMainView).is_some());

    h.app
        .update(Message::CollectionFetched(Ok(planned_collection())));
    let tree = h.app.tree();
    assert!(!tree.texts().contains(&"Loading your anime lists..."));
    assert!(tree.find_button(&UiEvent::AddCandidate(MediaId(10))).is_some());
    assert!(tree.find_button(&UiEvent::AddCandidate(MediaId(20))).is_some());
    assert!(tree.texts().contains(&"Naruto"));
}

#[test]
fn add_view_renders_all_filter_controls_at_defaults() {
    let mut h = harness(Arc::new(StaticSource::ok(planned_collection())));
    h.app.update(Message::SurfaceOpened);
    h.app.update(Message::Ui(UiEvent::OpenAddView));
    h.app
        .update(Message::CollectionFetched(Ok(planned_collection())));

    let mut fields = Vec::new();
    let mut selectors = Vec::new();
    h.app.tree().walk(&mut |node| match node {
        Node::TextInput { field, value, .. } => {
            fields.push((*field, value.clone()));
        }
        Node::Select {
            selector, selected, ..
        } => selectors.push((*selector, *selected)),
        _ => {}
    });
    assert_eq!(
        fields,
        [
            (TextField::Search, String::new()),
            (TextField::Year, String::new())
        ]
    );
    assert_eq!(
        selectors,
        [
            (Selector::Status, 0),
            (Selector::Season, 0),
            (Selector::Sort, 0)
        ]
    );
}

#[test]
fn add_view_distinguishes_empty_pool_reasons() {
    // Nothing to add at all.
    let mut h = harness(Arc::new(StaticSource::ok(collection_of(vec![]))));
    h.app.update(Message::SurfaceOpened);
    h.app.update(Message::Ui(UiEvent::OpenAddView));
    h.app
        .update(Message::CollectionFetched(Ok(collection_of(vec![]))));
    assert!(h.app.tree().texts().contains(
        &"Your lists are empty or everything is already in your watch order."
    ));

    // Candidates exist but the filters exclude them all.
    let mut h = harness(Arc::new(StaticSource::ok(planned_collection())));
    h.app.update(Message::SurfaceOpened);
    h.app.update(Message::Ui(UiEvent::OpenAddView));
    h.app
        .update(Message::CollectionFetched(Ok(planned_collection())));
    let effects =
        h.app.update(Message::Ui(UiEvent::SearchChanged("zzz".into())));
    let tsugi_tray::Effect::DebounceFilters { generation } = effects[0].clone()
    else {
        panic!("expected a debounce effect");
    };
    h.app.update(Message::FilterPassDue(generation));
    assert!(
        h.app
            .tree()
            .texts()
            .contains(&"No anime matches your filters.")
    );
}
