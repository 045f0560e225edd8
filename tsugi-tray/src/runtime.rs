//! Effect executor.
//!
//! `TraySurface` wraps a [`TrayApp`] in a message channel and runs its
//! asynchronous effects on tokio: the collection fetch and the filter
//! debounce timer. There is deliberately no cancellation: a fetch
//! started before the user navigates away still completes and its
//! result is processed unseen, and a superseded debounce pass is
//! dropped by its stale generation rather than aborted.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::sleep;

use crate::messages::Message;
use crate::update::{Effect, TrayApp};

/// A running surface: the app plus its message channel.
#[derive(Debug)]
pub struct TraySurface {
    app: TrayApp,
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
}

impl TraySurface {
    pub fn new(app: TrayApp) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        TraySurface { app, tx, rx }
    }

    pub fn app(&self) -> &TrayApp {
        &self.app
    }

    /// Sender for the host: user events and data-refresh snapshots come
    /// in through here.
    pub fn sender(&self) -> UnboundedSender<Message> {
        self.tx.clone()
    }

    /// (Re)open the surface: reloads persisted queue and settings.
    pub fn open(&mut self) {
        self.dispatch(Message::SurfaceOpened);
    }

    /// Process one message synchronously, spawning its effects.
    ///
    /// Must be called within a tokio runtime.
    pub fn dispatch(&mut self, message: Message) {
        for effect in self.app.update(message) {
            self.execute(effect);
        }
    }

    /// Wait for and process the next queued message. Returns false once
    /// every sender is gone.
    pub async fn pump(&mut self) -> bool {
        match self.rx.recv().await {
            Some(message) => {
                self.dispatch(message);
                true
            }
            None => false,
        }
    }

    /// Drive the surface until every sender is dropped.
    pub async fn run(mut self) {
        while self.pump().await {}
    }

    fn execute(&self, effect: Effect) {
        let tx = self.tx.clone();
        match effect {
            Effect::FetchCollection => {
                let source = self.app.collection_source();
                tokio::spawn(async move {
                    let result =
                        source.fetch(true).await.map_err(|err| err.to_string());
                    // The receiver only closes when the surface is torn
                    // down; a late result is dropped with it.
                    let _ = tx.send(Message::CollectionFetched(result));
                });
            }
            Effect::DebounceFilters { generation } => {
                let delay = self.app.options().filter_debounce;
                tokio::spawn(async move {
                    sleep(delay).await;
                    let _ = tx.send(Message::FilterPassDue(generation));
                });
            }
        }
    }
}
