//! In-app navigation port.

use tsugi_model::MediaId;

/// Navigation requests into the host application.
pub trait Navigator: Send + Sync {
    /// Open the detail view for the given media item.
    fn open_entry(&self, media_id: MediaId);
}
