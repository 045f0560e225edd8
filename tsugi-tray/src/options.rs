//! Surface configuration.

use std::time::Duration;

/// Delay applied before re-deriving the candidate pool after a filter or
/// search change, coalescing rapid input into one recomputation.
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(250);

/// Fixed storage key of the persisted queue record.
pub const QUEUE_STORAGE_KEY: &str = "watchOrderList";

/// Fixed storage key of the persisted settings record.
pub const SETTINGS_STORAGE_KEY: &str = "watchOrderSettings";

/// Knobs for embedding the surface. The defaults match the keys and
/// timing the original tray shipped with; tests shorten the debounce.
#[derive(Debug, Clone)]
pub struct SurfaceOptions {
    pub queue_key: String,
    pub settings_key: String,
    pub filter_debounce: Duration,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        SurfaceOptions {
            queue_key: QUEUE_STORAGE_KEY.to_string(),
            settings_key: SETTINGS_STORAGE_KEY.to_string(),
            filter_debounce: FILTER_DEBOUNCE,
        }
    }
}
