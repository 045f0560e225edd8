use serde::{Deserialize, Serialize};

/// Strongly typed identifier for a media title on the list service.
///
/// This is the identity used for de-duplication and for matching queue
/// entries against remote collection data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MediaId(pub i64);

impl MediaId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for MediaId {
    fn from(raw: i64) -> Self {
        MediaId(raw)
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed identifier for a source-list entry.
///
/// Entry ids are allocated monotonically by the list service, which makes
/// them a usable proxy for chronological "time added" ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl EntryId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for EntryId {
    fn from(raw: i64) -> Self {
        EntryId(raw)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
