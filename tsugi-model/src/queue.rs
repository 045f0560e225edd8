//! Persisted queue entry.

use serde::{Deserialize, Serialize};

use crate::collection::{ListEntry, MediaSummary, Season};
use crate::ids::{EntryId, MediaId};

/// One entry of the persisted watch-next queue.
///
/// Position within the queue is the user-visible watch order and is
/// semantically meaningful; entries are unique by [`MediaId`] within a
/// queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub media_id: MediaId,
    /// The source-list entry this came from, used as the "time added"
    /// ordering proxy. Absent for entries persisted by older versions.
    #[serde(default)]
    pub entry_id: Option<EntryId>,
    pub title: String,
    pub cover_image: String,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub season_year: Option<u16>,
}

impl QueueEntry {
    /// Build an entry from a source-list entry, defaulting the display
    /// fields the way the surface renders them. Returns `None` when the
    /// entry carries no media data.
    pub fn from_list_entry(entry: &ListEntry) -> Option<Self> {
        let media = entry.media.as_ref()?;
        Some(Self::from_media(media, entry.id))
    }

    pub fn from_media(media: &MediaSummary, entry_id: Option<EntryId>) -> Self {
        QueueEntry {
            media_id: media.id,
            entry_id,
            title: media.display_title(),
            cover_image: media.cover_url(),
            season: media.season,
            season_year: media.season_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{CoverImage, MediaTitle, UNKNOWN_TITLE};

    fn media(id: i64, title: Option<&str>) -> MediaSummary {
        MediaSummary {
            id: MediaId(id),
            title: title.map(|t| MediaTitle {
                user_preferred: Some(t.to_string()),
            }),
            cover_image: Some(CoverImage {
                large: Some("cover.png".into()),
                medium: None,
            }),
            season: None,
            season_year: None,
        }
    }

    #[test]
    fn from_list_entry_requires_media() {
        let entry = ListEntry {
            id: Some(EntryId(7)),
            media: None,
        };
        assert!(QueueEntry::from_list_entry(&entry).is_none());

        let entry = ListEntry {
            id: Some(EntryId(7)),
            media: Some(media(3, Some("Mushishi"))),
        };
        let queued = QueueEntry::from_list_entry(&entry).unwrap();
        assert_eq!(queued.media_id, MediaId(3));
        assert_eq!(queued.entry_id, Some(EntryId(7)));
        assert_eq!(queued.title, "Mushishi");
        assert_eq!(queued.cover_image, "cover.png");
    }

    #[test]
    fn from_media_defaults_missing_title() {
        let queued = QueueEntry::from_media(&media(3, None), None);
        assert_eq!(queued.title, UNKNOWN_TITLE);
    }

    #[test]
    fn persisted_form_tolerates_missing_optionals() {
        // Entries written before entry_id/season were recorded.
        let raw = r#"{"media_id":5,"title":"Ping Pong","cover_image":""}"#;
        let entry: QueueEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.media_id, MediaId(5));
        assert_eq!(entry.entry_id, None);
        assert_eq!(entry.season, None);
    }
}
