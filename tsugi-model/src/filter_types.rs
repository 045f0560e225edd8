//! Selector enums backing the candidate-browser filter controls.

use std::fmt;

use crate::collection::{ListStatus, Season};

/// Source-list selector: a single status, or every list at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UiStatusFilter {
    #[default]
    All,
    Status(ListStatus),
}

impl UiStatusFilter {
    pub fn all() -> Vec<UiStatusFilter> {
        let mut options = vec![UiStatusFilter::All];
        options.extend(ListStatus::all().iter().map(|s| UiStatusFilter::Status(*s)));
        options
    }

    /// The concrete status to select, or `None` for every list.
    pub fn as_status(&self) -> Option<ListStatus> {
        match self {
            UiStatusFilter::All => None,
            UiStatusFilter::Status(status) => Some(*status),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiStatusFilter::All => "All",
            UiStatusFilter::Status(status) => status.label(),
        }
    }
}

impl fmt::Display for UiStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Season selector for the candidate browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UiSeasonFilter {
    #[default]
    Any,
    Season(Season),
}

impl UiSeasonFilter {
    pub fn all() -> Vec<UiSeasonFilter> {
        let mut options = vec![UiSeasonFilter::Any];
        options.extend(Season::all().iter().map(|s| UiSeasonFilter::Season(*s)));
        options
    }

    pub fn as_season(&self) -> Option<Season> {
        match self {
            UiSeasonFilter::Any => None,
            UiSeasonFilter::Season(season) => Some(*season),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UiSeasonFilter::Any => "Any Season",
            UiSeasonFilter::Season(season) => season.label(),
        }
    }
}

impl fmt::Display for UiSeasonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sort applied to the candidate pool.
///
/// "Added" ordering uses the source-list entry id as its chronological
/// proxy; the default preserves source-list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    #[default]
    SourceOrder,
    AddedAsc,
    AddedDesc,
}

impl SortMode {
    pub fn all() -> &'static [SortMode] {
        use SortMode::*;
        &[SourceOrder, AddedAsc, AddedDesc]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::SourceOrder => "Default",
            SortMode::AddedAsc => "Added (Oldest)",
            SortMode::AddedDesc => "Added (Newest)",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
