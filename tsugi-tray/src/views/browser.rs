//! Add screen: filter controls over the candidate grid.

use tsugi_model::{SortMode, UiSeasonFilter, UiStatusFilter};

use crate::messages::UiEvent;
use crate::state::TrayState;
use crate::tree::{Intent, Node, Selector, TextField};

use super::header;

pub(super) fn add_view(state: &TrayState) -> Node {
    let mut children = vec![header("Add to Watch Order", false, true)];

    if state.loading {
        children.push(Node::text(
            "Loading your anime lists...",
            "text-center text-gray-400 mt-8",
        ));
        return Node::container("", children);
    }

    children.push(controls_bar(state));

    if state.pool.is_empty() {
        let message = if state.unfiltered_len == 0 {
            "Your lists are empty or everything is already in your watch order."
        } else {
            "No anime matches your filters."
        };
        children.push(Node::text(message, "text-center text-gray-400 mt-8"));
    } else {
        children.push(Node::container(
            "grid grid-cols-2 sm:grid-cols-3 gap-4 mt-4",
            state.pool.iter().map(candidate_cell).collect(),
        ));
    }

    Node::container("", children)
}

/// Search, year, and the three selectors, mirroring the filter order the
/// derivation applies them in.
fn controls_bar(state: &TrayState) -> Node {
    Node::container(
        "flex flex-col gap-2",
        vec![
            Node::TextInput {
                field: TextField::Search,
                value: state.filters.search.clone(),
                placeholder: "Search...".to_string(),
            },
            Node::container(
                "flex flex-row gap-2",
                vec![
                    Node::TextInput {
                        field: TextField::Year,
                        value: state.filters.year.clone(),
                        placeholder: "Year".to_string(),
                    },
                    status_select(state.filters.status),
                    season_select(state.filters.season),
                    sort_select(state.filters.sort),
                ],
            ),
        ],
    )
}

fn status_select(current: UiStatusFilter) -> Node {
    let options = UiStatusFilter::all();
    Node::Select {
        selector: Selector::Status,
        selected: options.iter().position(|o| *o == current).unwrap_or(0),
        options: options.iter().map(|o| o.label().to_string()).collect(),
    }
}

fn season_select(current: UiSeasonFilter) -> Node {
    let options = UiSeasonFilter::all();
    Node::Select {
        selector: Selector::Season,
        selected: options.iter().position(|o| *o == current).unwrap_or(0),
        options: options.iter().map(|o| o.label().to_string()).collect(),
    }
}

fn sort_select(current: SortMode) -> Node {
    let options = SortMode::all();
    Node::Select {
        selector: Selector::Sort,
        selected: options.iter().position(|o| *o == current).unwrap_or(0),
        options: options.iter().map(|o| o.label().to_string()).collect(),
    }
}

fn candidate_cell(candidate: &tsugi_model::QueueEntry) -> Node {
    Node::container(
        "",
        vec![
            Node::container(
                "relative",
                vec![
                    Node::image(
                        candidate.cover_image.clone(),
                        "w-full min-h-[150px] bg-contain bg-center bg-no-repeat relative opacity-50",
                    ),
                    Node::button(
                        "Add",
                        UiEvent::AddCandidate(candidate.media_id),
                        Intent::Success,
                    )
                    .class("absolute inset-0 w-full h-full bg-transparent hover:bg-gray-500 z-10 transition-colors duration-300"),
                ],
            ),
            Node::text(
                candidate.title.clone(),
                "text-sm font-semibold text-center line-clamp-2 break-normal mt-1",
            ),
        ],
    )
}
