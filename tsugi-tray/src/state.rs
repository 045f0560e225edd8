//! Transient surface state. None of this is persisted; the queue and
//! settings live in their `tsugi-core` stores.

use tsugi_core::CandidateFilters;
use tsugi_model::{MediaCollection, QueueEntry};

/// Which screen the surface currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrayView {
    /// The ordered queue, optionally overlaid by the clear confirmation.
    #[default]
    Main,
    /// The candidate browser.
    Add,
}

impl TrayView {
    pub fn is_main(&self) -> bool {
        matches!(self, TrayView::Main)
    }

    pub fn is_add(&self) -> bool {
        matches!(self, TrayView::Add)
    }
}

/// Transient UI state of one surface instance.
#[derive(Debug, Default)]
pub struct TrayState {
    pub view: TrayView,
    /// True while the collection fetch for the add view is in flight;
    /// suppresses rendering of stale or partial candidate data.
    pub loading: bool,
    pub show_clear_confirm: bool,
    /// Filter/sort selections of the candidate browser. Reset to their
    /// defaults every time the add view opens.
    pub filters: CandidateFilters,
    /// The derived candidate pool currently on screen.
    pub pool: Vec<QueueEntry>,
    /// Pool size before search/year/season filtering, for the empty-state
    /// wording.
    pub unfiltered_len: usize,
    /// Snapshot the pool derives from; populated by the last fetch,
    /// discarded on failure.
    pub snapshot: Option<MediaCollection>,
    /// Generation counter for debounced filter passes; a pass whose
    /// generation no longer matches is stale and ignored.
    pub filter_generation: u64,
}

impl TrayState {
    /// Reset everything the add view owns, ready for a fresh fetch.
    pub fn reset_add_view(&mut self) {
        self.filters = CandidateFilters::default();
        self.pool.clear();
        self.unfiltered_len = 0;
        self.snapshot = None;
    }
}
