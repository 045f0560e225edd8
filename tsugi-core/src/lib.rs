//! Domain logic for the tsugi watch-next surface.
//!
//! This crate owns everything below the UI layer: the persisted queue
//! store, the candidate-pool derivation, the auto-removal reconciler, the
//! settings store, and the port traits the host runtime implements
//! (key-value storage, the remote collection source, toast delivery,
//! navigation). Reference storage adapters live in [`storage`]; the host
//! is expected to bring its own.

pub mod candidates;
pub mod error;
pub mod queue;
pub mod reconcile;
pub mod settings;
pub mod storage;
pub mod traits;

pub use candidates::{CandidateFilters, derive_candidates};
pub use error::CoreError;
pub use queue::QueueStore;
pub use reconcile::{reconcile_queue, watching_ids};
pub use settings::SettingsStore;
pub use storage::{JsonFileStore, MemoryStore};
pub use traits::{
    CollectionSource, KeyValueStore, KeyValueStoreExt, Navigator, Notifier,
};
