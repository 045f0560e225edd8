//! Core data model definitions shared across tsugi crates.
#![allow(missing_docs)]

pub mod collection;
pub mod filter_types;
pub mod ids;
pub mod prelude;
pub mod queue;
pub mod settings;

// Intentionally curated re-exports for downstream consumers.
pub use collection::{
    CoverImage, ListEntry, ListStatus, MediaCollection, MediaList,
    MediaSummary, MediaTitle, Season,
};
pub use filter_types::{SortMode, UiSeasonFilter, UiStatusFilter};
pub use ids::{EntryId, MediaId};
pub use queue::QueueEntry;
pub use settings::TraySettings;
