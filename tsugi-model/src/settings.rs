//! Persisted surface settings.

use serde::{Deserialize, Serialize};

/// Settings stored independently from the queue itself.
///
/// Unknown or missing fields fall back to their defaults so older
/// persisted records keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraySettings {
    /// When enabled, queue entries that transition into the "currently
    /// watching" status on the list service are removed automatically.
    pub auto_remove: bool,
}
