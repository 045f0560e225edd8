//! Surface-focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in tsugi-tray or other presentation layers.

pub use super::collection::{
    CoverImage, ListEntry, ListStatus, MediaCollection, MediaList,
    MediaSummary, MediaTitle, Season, UNKNOWN_TITLE,
};
pub use super::filter_types::{SortMode, UiSeasonFilter, UiStatusFilter};
pub use super::ids::{EntryId, MediaId};
pub use super::queue::QueueEntry;
pub use super::settings::TraySettings;
