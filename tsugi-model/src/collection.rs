//! Remote list-collection snapshot types.
//!
//! These mirror the wire shape the list service returns: a collection
//! grouped into named lists by status, each list holding entries that
//! reference underlying media. Every field the service may omit is an
//! `Option`; display defaulting happens in the accessors, never as an
//! error.

use serde::{Deserialize, Serialize};

use crate::ids::{EntryId, MediaId};

/// Placeholder shown when an entry carries no usable title.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Status code of a source list, string-encoded the way the service
/// encodes them (`PLANNING`, `CURRENT`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListStatus {
    Current,
    Planning,
    Completed,
    Dropped,
    Paused,
    Repeating,
}

impl ListStatus {
    pub fn all() -> &'static [ListStatus] {
        use ListStatus::*;
        &[Current, Planning, Completed, Dropped, Paused, Repeating]
    }

    /// The service-side status code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListStatus::Current => "CURRENT",
            ListStatus::Planning => "PLANNING",
            ListStatus::Completed => "COMPLETED",
            ListStatus::Dropped => "DROPPED",
            ListStatus::Paused => "PAUSED",
            ListStatus::Repeating => "REPEATING",
        }
    }

    /// Human-readable label for selector controls.
    pub fn label(&self) -> &'static str {
        match self {
            ListStatus::Current => "Watching",
            ListStatus::Planning => "Planning",
            ListStatus::Completed => "Completed",
            ListStatus::Dropped => "Dropped",
            ListStatus::Paused => "Paused",
            ListStatus::Repeating => "Rewatching",
        }
    }
}

impl std::fmt::Display for ListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Airing season of a media title.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub fn all() -> &'static [Season] {
        use Season::*;
        &[Winter, Spring, Summer, Fall]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Title variants for a media item; the user-preferred form is the only
/// one this surface displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTitle {
    pub user_preferred: Option<String>,
}

/// Cover image variants by size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    pub large: Option<String>,
    pub medium: Option<String>,
}

/// The underlying media a list entry references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSummary {
    pub id: MediaId,
    #[serde(default)]
    pub title: Option<MediaTitle>,
    #[serde(default)]
    pub cover_image: Option<CoverImage>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub season_year: Option<u16>,
}

impl MediaSummary {
    /// Display title, defaulting to [`UNKNOWN_TITLE`] when absent.
    pub fn display_title(&self) -> String {
        self.title
            .as_ref()
            .and_then(|t| t.user_preferred.clone())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
    }

    /// Cover image URL, preferring the large variant, falling back to
    /// medium, then to the empty string.
    pub fn cover_url(&self) -> String {
        self.cover_image
            .as_ref()
            .and_then(|c| c.large.clone().or_else(|| c.medium.clone()))
            .unwrap_or_default()
    }
}

/// One entry of a source list. `media` can be absent for entries the
/// service failed to hydrate; such entries are skipped downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    #[serde(default)]
    pub id: Option<EntryId>,
    #[serde(default)]
    pub media: Option<MediaSummary>,
}

/// A named grouping (by status) within the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaList {
    pub status: ListStatus,
    #[serde(default)]
    pub entries: Vec<ListEntry>,
}

/// Snapshot of the user's full collection on the list service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCollection {
    #[serde(default)]
    pub lists: Vec<MediaList>,
}

impl MediaCollection {
    /// Every list whose status code matches `status`. The service keeps
    /// one list per status, but custom lists can duplicate a code.
    pub fn lists_with_status(
        &self,
        status: ListStatus,
    ) -> impl Iterator<Item = &MediaList> {
        self.lists.iter().filter(move |l| l.status == status)
    }

    /// All entries across every list, in source order.
    pub fn all_entries(&self) -> impl Iterator<Item = &ListEntry> {
        self.lists.iter().flat_map(|l| l.entries.iter())
    }
}
