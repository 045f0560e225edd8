//! Surface messages.

use tsugi_model::{
    MediaCollection, MediaId, SortMode, UiSeasonFilter, UiStatusFilter,
};

use crate::tree::{Selector, TextField, ToggleId};

/// User-originated events, attached to the controls of the rendered
/// tree. The host driver feeds these back as [`Message::Ui`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // View navigation
    OpenAddView,
    OpenMainView,
    OpenEntry(MediaId),

    // Queue mutation
    AddCandidate(MediaId),
    RemoveEntry(MediaId),
    MoveEntryUp(usize),
    MoveEntryDown(usize),

    // Clear confirmation flow
    RequestClearQueue,
    ConfirmClearQueue,
    CancelClearQueue,

    // Candidate browser controls
    SearchChanged(String),
    YearChanged(String),
    SeasonSelected(UiSeasonFilter),
    StatusSelected(UiStatusFilter),
    SortSelected(SortMode),

    // Settings
    AutoRemoveToggled(bool),
}

/// Everything the update loop processes: user events plus the runtime
/// results delivered by the effect executor and the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Ui(UiEvent),
    /// The surface was (re)opened; persisted queue and settings reload.
    SurfaceOpened,
    /// Result of the asynchronous collection fetch started when the add
    /// view opened.
    CollectionFetched(Result<MediaCollection, String>),
    /// A fresh snapshot arrived through the host's data-refresh
    /// mechanism; drives auto-removal.
    CollectionRefreshed(MediaCollection),
    /// A debounce timer elapsed. Stale generations are dropped.
    FilterPassDue(u64),
}

impl From<UiEvent> for Message {
    fn from(event: UiEvent) -> Self {
        Message::Ui(event)
    }
}

/// Map a text-field edit coming from the host driver to its event.
pub fn text_input_event(field: TextField, value: String) -> UiEvent {
    match field {
        TextField::Search => UiEvent::SearchChanged(value),
        TextField::Year => UiEvent::YearChanged(value),
    }
}

/// Map a selector choice coming from the host driver to its event.
/// Returns `None` for an out-of-range index.
pub fn select_event(selector: Selector, index: usize) -> Option<UiEvent> {
    match selector {
        Selector::Status => UiStatusFilter::all()
            .get(index)
            .copied()
            .map(UiEvent::StatusSelected),
        Selector::Season => UiSeasonFilter::all()
            .get(index)
            .copied()
            .map(UiEvent::SeasonSelected),
        Selector::Sort => SortMode::all()
            .get(index)
            .copied()
            .map(UiEvent::SortSelected),
    }
}

/// Map a toggle flip coming from the host driver to its event.
pub fn toggle_event(toggle: ToggleId, on: bool) -> UiEvent {
    match toggle {
        ToggleId::AutoRemove => UiEvent::AutoRemoveToggled(on),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsugi_model::ListStatus;

    #[test]
    fn select_event_maps_indices_onto_option_lists() {
        assert_eq!(
            select_event(Selector::Status, 0),
            Some(UiEvent::StatusSelected(UiStatusFilter::All))
        );
        assert_eq!(
            select_event(Selector::Status, 1),
            Some(UiEvent::StatusSelected(UiStatusFilter::Status(
                ListStatus::Current
            )))
        );
        assert_eq!(select_event(Selector::Sort, 99), None);
    }
}
