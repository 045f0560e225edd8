//! Port traits the host runtime implements.
//!
//! The surface never talks to the outside world directly: rendering,
//! storage, the list service, toasts, and navigation all arrive through
//! these seams.

mod collection;
mod navigate;
mod notify;
mod storage;

pub use collection::CollectionSource;
pub use navigate::Navigator;
pub use notify::Notifier;
pub use storage::{KeyValueStore, KeyValueStoreExt};

#[cfg(test)]
pub use collection::MockCollectionSource;
#[cfg(test)]
pub use storage::MockKeyValueStore;
