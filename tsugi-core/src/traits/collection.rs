//! Remote list-collection port.

use async_trait::async_trait;
use tsugi_model::MediaCollection;

use crate::error::CoreError;

/// Source of the user's collection on the list service.
///
/// Fetching is the surface's one asynchronous step; implementations map
/// network and decoding failures into [`CoreError::Collection`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// Fetch a fresh collection snapshot. `bypass_cache` asks the host
    /// to skip any cached copy it holds.
    async fn fetch(&self, bypass_cache: bool)
    -> Result<MediaCollection, CoreError>;
}
