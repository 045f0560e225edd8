//! Candidate-pool derivation.
//!
//! Shared helpers translating the candidate browser's filter state into a
//! reproducible view over a collection snapshot. Derivation is a pure
//! function of (snapshot, queued identities, filters): same inputs, same
//! pool.

use std::collections::HashSet;

use tsugi_model::{
    MediaCollection, MediaId, QueueEntry, SortMode, UiSeasonFilter,
    UiStatusFilter,
};

/// Filter and sort state collected from the candidate browser controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilters {
    /// Free-text title search, matched case-insensitively as a substring.
    pub search: String,
    /// Raw year text; non-numeric input means "no year filter".
    pub year: String,
    pub season: UiSeasonFilter,
    pub sort: SortMode,
    pub status: UiStatusFilter,
}

impl CandidateFilters {
    /// The year to match exactly, when the year text parses.
    pub fn year_filter(&self) -> Option<u16> {
        self.year.trim().parse().ok()
    }
}

/// Derive the addable candidates from a collection snapshot.
///
/// Entries lacking media data are dropped, already-queued identities are
/// excluded, and a media identity appearing in more than one source list
/// (status filter "All") is kept once, first occurrence wins. Filters and
/// sort then apply in order: search, year, season, sort mode.
pub fn derive_candidates(
    collection: &MediaCollection,
    queued: &HashSet<MediaId>,
    filters: &CandidateFilters,
) -> Vec<QueueEntry> {
    let mut seen = HashSet::new();
    let mut pool: Vec<QueueEntry> = match filters.status.as_status() {
        None => collection.all_entries().collect::<Vec<_>>(),
        Some(status) => collection
            .lists_with_status(status)
            .flat_map(|list| list.entries.iter())
            .collect(),
    }
    .into_iter()
    .filter_map(QueueEntry::from_list_entry)
    .filter(|candidate| !queued.contains(&candidate.media_id))
    .filter(|candidate| seen.insert(candidate.media_id))
    .collect();

    if !filters.search.trim().is_empty() {
        let needle = filters.search.trim().to_lowercase();
        pool.retain(|c| c.title.to_lowercase().contains(&needle));
    }

    if let Some(year) = filters.year_filter() {
        pool.retain(|c| c.season_year == Some(year));
    }

    if let Some(season) = filters.season.as_season() {
        pool.retain(|c| c.season == Some(season));
    }

    match filters.sort {
        SortMode::SourceOrder => {}
        // Entries without an id sort first ascending / last descending;
        // the sort is stable either way.
        SortMode::AddedAsc => pool.sort_by(|a, b| a.entry_id.cmp(&b.entry_id)),
        SortMode::AddedDesc => pool.sort_by(|a, b| b.entry_id.cmp(&a.entry_id)),
    }

    pool
}
