//! Pure view functions: state in, [`Node`] tree out.

mod browser;
mod queue;

use tsugi_model::{QueueEntry, TraySettings};

use crate::messages::UiEvent;
use crate::state::{TrayState, TrayView};
use crate::tree::{Intent, Node};

/// Render the whole surface for the current state. Invoked after every
/// mutation; must stay free of side effects.
pub fn render(
    state: &TrayState,
    queue: &[QueueEntry],
    settings: TraySettings,
) -> Node {
    match state.view {
        TrayView::Main => queue::main_view(state, queue, settings),
        TrayView::Add => browser::add_view(state),
    }
}

/// Shared screen header: title on the left, context actions on the
/// right, divider underneath.
fn header(title: &str, on_main: bool, queue_empty: bool) -> Node {
    let mut actions = Vec::new();
    if on_main {
        if !queue_empty {
            actions.push(Node::button(
                "Remove All",
                UiEvent::RequestClearQueue,
                Intent::AlertSubtle,
            ));
        }
        actions.push(Node::button(
            "Add Anime",
            UiEvent::OpenAddView,
            Intent::Primary,
        ));
    } else {
        actions.push(Node::button(
            "Back to List",
            UiEvent::OpenMainView,
            Intent::PrimarySubtle,
        ));
    }

    Node::container(
        "flex flex-col",
        vec![
            Node::container(
                "flex flex-row justify-between items-center",
                vec![
                    Node::text(title, "font-bold text-lg"),
                    Node::container("flex gap-2", actions),
                ],
            ),
            Node::container(
                "w-full border-b border-2 self-center rounded mt-2 mb-4",
                Vec::new(),
            ),
        ],
    )
}
