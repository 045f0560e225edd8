//! Message handling.
//!
//! `TrayApp` owns the stores, the ports, and the transient state, and
//! processes one [`Message`] at a time. Handlers mutate state and call
//! the synchronous ports directly; the two asynchronous steps (fetch,
//! debounce) are returned as [`Effect`]s for the runtime to execute.
//! After every message the tree is re-rendered and committed to the
//! observable cell, so subscribers always see the current state.

use std::sync::Arc;

use tsugi_core::traits::{
    CollectionSource, KeyValueStore, Navigator, Notifier,
};
use tsugi_core::{
    CandidateFilters, QueueStore, SettingsStore, derive_candidates,
    reconcile_queue,
};
use tsugi_model::{MediaCollection, MediaId, TraySettings};

use crate::messages::{Message, UiEvent};
use crate::options::SurfaceOptions;
use crate::reactive::Cell;
use crate::state::{TrayState, TrayView};
use crate::tree::Node;
use crate::views;

/// Asynchronous work a handler requested. The runtime executes these
/// and feeds the results back as messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch a fresh collection snapshot for the add view.
    FetchCollection,
    /// Deliver [`Message::FilterPassDue`] with this generation after the
    /// debounce delay.
    DebounceFilters { generation: u64 },
}

/// The tray application: state, stores, and ports.
pub struct TrayApp {
    state: TrayState,
    queue: QueueStore,
    settings: SettingsStore,
    source: Arc<dyn CollectionSource>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    tree: Cell<Node>,
    options: SurfaceOptions,
}

impl std::fmt::Debug for TrayApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrayApp")
            .field("state", &self.state)
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}

impl TrayApp {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        source: Arc<dyn CollectionSource>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        options: SurfaceOptions,
    ) -> Self {
        let queue = QueueStore::new(storage.clone(), options.queue_key.clone());
        let settings =
            SettingsStore::new(storage, options.settings_key.clone());
        let state = TrayState::default();
        let tree = Cell::new(views::render(
            &state,
            queue.entries(),
            TraySettings::default(),
        ));
        TrayApp {
            state,
            queue,
            settings,
            source,
            notifier,
            navigator,
            tree,
            options,
        }
    }

    pub fn state(&self) -> &TrayState {
        &self.state
    }

    pub fn queue_entries(&self) -> &[tsugi_model::QueueEntry] {
        self.queue.entries()
    }

    pub fn auto_remove(&self) -> bool {
        self.settings.auto_remove()
    }

    /// The most recently committed tree.
    pub fn tree(&self) -> &Node {
        self.tree.get()
    }

    /// Register the host's render hook; called synchronously with every
    /// committed tree.
    pub fn subscribe_render(
        &mut self,
        subscriber: impl Fn(&Node) + Send + 'static,
    ) {
        self.tree.subscribe(subscriber);
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    pub(crate) fn collection_source(&self) -> Arc<dyn CollectionSource> {
        self.source.clone()
    }

    /// Process one message, returning any asynchronous effects.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        let effects = match message {
            Message::Ui(event) => self.on_ui_event(event),
            Message::SurfaceOpened => {
                self.queue.load();
                self.settings.load();
                self.state = TrayState::default();
                Vec::new()
            }
            Message::CollectionFetched(Ok(collection)) => {
                // The pool populates even if the user already navigated
                // back; the stale result is simply never on screen.
                self.state.loading = false;
                self.state.snapshot = Some(collection);
                self.recompute_pool();
                Vec::new()
            }
            Message::CollectionFetched(Err(err)) => {
                log::warn!("collection fetch failed: {err}");
                self.notifier.error("Failed to load your anime lists.");
                self.state.loading = false;
                self.state.snapshot = None;
                self.state.pool.clear();
                self.state.unfiltered_len = 0;
                Vec::new()
            }
            Message::CollectionRefreshed(collection) => {
                self.on_collection_refreshed(&collection);
                Vec::new()
            }
            Message::FilterPassDue(generation) => {
                if generation == self.state.filter_generation {
                    self.recompute_pool();
                } else {
                    log::debug!(
                        "dropping stale filter pass (generation {generation})"
                    );
                }
                Vec::new()
            }
        };
        self.commit();
        effects
    }

    fn on_ui_event(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::OpenAddView => {
                self.state.view = TrayView::Add;
                self.state.reset_add_view();
                self.state.loading = true;
                return vec![Effect::FetchCollection];
            }
            UiEvent::OpenMainView => {
                self.state.view = TrayView::Main;
            }
            UiEvent::OpenEntry(media_id) => {
                self.navigator.open_entry(media_id);
            }
            UiEvent::AddCandidate(media_id) => self.add_candidate(media_id),
            UiEvent::RemoveEntry(media_id) => {
                if let Err(err) = self.queue.remove(media_id) {
                    log::warn!("failed to persist queue: {err}");
                }
            }
            UiEvent::MoveEntryUp(index) => {
                if let Err(err) = self.queue.move_up(index) {
                    log::warn!("failed to persist queue: {err}");
                }
            }
            UiEvent::MoveEntryDown(index) => {
                if let Err(err) = self.queue.move_down(index) {
                    log::warn!("failed to persist queue: {err}");
                }
            }
            UiEvent::RequestClearQueue => {
                self.state.show_clear_confirm = true;
            }
            UiEvent::ConfirmClearQueue => {
                if let Err(err) = self.queue.clear() {
                    log::warn!("failed to persist queue: {err}");
                }
                self.notifier.success("Watch order list has been cleared.");
                self.state.show_clear_confirm = false;
            }
            UiEvent::CancelClearQueue => {
                self.state.show_clear_confirm = false;
            }
            UiEvent::SearchChanged(text) => {
                self.state.filters.search = text;
                return self.schedule_filter_pass();
            }
            UiEvent::YearChanged(text) => {
                self.state.filters.year = text;
                return self.schedule_filter_pass();
            }
            UiEvent::SeasonSelected(season) => {
                self.state.filters.season = season;
                return self.schedule_filter_pass();
            }
            UiEvent::StatusSelected(status) => {
                self.state.filters.status = status;
                return self.schedule_filter_pass();
            }
            UiEvent::SortSelected(sort) => {
                self.state.filters.sort = sort;
                return self.schedule_filter_pass();
            }
            UiEvent::AutoRemoveToggled(enabled) => {
                if let Err(err) = self.settings.set_auto_remove(enabled) {
                    log::warn!("failed to persist settings: {err}");
                }
            }
        }
        Vec::new()
    }

    fn add_candidate(&mut self, media_id: MediaId) {
        let Some(candidate) =
            self.state.pool.iter().find(|c| c.media_id == media_id).cloned()
        else {
            return;
        };
        match self.queue.append(candidate.clone()) {
            Ok(true) => {
                self.notifier
                    .success(&format!("'{}' added.", candidate.title));
            }
            Ok(false) => {}
            Err(err) => log::warn!("failed to persist queue: {err}"),
        }
        // Queued either way now; stop offering it.
        self.state.pool.retain(|c| c.media_id != media_id);
        self.state.unfiltered_len = self.state.unfiltered_len.saturating_sub(1);
    }

    fn on_collection_refreshed(&mut self, collection: &MediaCollection) {
        match reconcile_queue(
            &mut self.queue,
            collection,
            self.settings.auto_remove(),
        ) {
            Ok(removed) => {
                for entry in removed {
                    self.notifier.info(&format!(
                        "'{}' removed from your watch order.",
                        entry.title
                    ));
                }
            }
            Err(err) => log::warn!("failed to persist queue: {err}"),
        }
    }

    fn schedule_filter_pass(&mut self) -> Vec<Effect> {
        self.state.filter_generation += 1;
        vec![Effect::DebounceFilters {
            generation: self.state.filter_generation,
        }]
    }

    fn recompute_pool(&mut self) {
        let Some(snapshot) = self.state.snapshot.as_ref() else {
            return;
        };
        let queued = self.queue.queued_ids();
        let base = CandidateFilters {
            status: self.state.filters.status,
            ..Default::default()
        };
        let unfiltered = derive_candidates(snapshot, &queued, &base);
        let pool = derive_candidates(snapshot, &queued, &self.state.filters);
        self.state.unfiltered_len = unfiltered.len();
        self.state.pool = pool;
    }

    fn commit(&mut self) {
        let tree = views::render(
            &self.state,
            self.queue.entries(),
            self.settings.settings(),
        );
        self.tree.set(tree);
    }
}
