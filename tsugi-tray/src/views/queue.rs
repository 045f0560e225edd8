//! Main screen: the ordered queue, the auto-remove toggle, and the
//! clear-confirmation overlay.

use tsugi_model::{QueueEntry, TraySettings};

use crate::messages::UiEvent;
use crate::state::TrayState;
use crate::tree::{Intent, Node, ToggleId};

use super::header;

pub(super) fn main_view(
    state: &TrayState,
    queue: &[QueueEntry],
    settings: TraySettings,
) -> Node {
    let mut children = vec![
        header("My Watch Order", true, queue.is_empty()),
        Node::Toggle {
            toggle: ToggleId::AutoRemove,
            label: "Remove entries I start watching".to_string(),
            on: settings.auto_remove,
        },
    ];

    if queue.is_empty() {
        children.push(Node::container(
            "",
            vec![
                Node::text(
                    "Your list is empty.",
                    "text-center text-gray-400 mt-8",
                ),
                Node::text(
                    "Click 'Add Anime' to build your watch order.",
                    "text-center text-gray-400",
                ),
            ],
        ));
    } else {
        children.push(Node::container(
            "",
            queue
                .iter()
                .enumerate()
                .map(|(index, entry)| queue_row(index, entry, queue.len()))
                .collect(),
        ));
    }

    if state.show_clear_confirm {
        children.push(clear_confirmation());
    }

    Node::container("relative", children)
}

fn queue_row(index: usize, entry: &QueueEntry, total: usize) -> Node {
    let controls = Node::container(
        "flex flex-col gap-1 relative z-20",
        vec![
            Node::button(
                "⬆️",
                UiEvent::MoveEntryUp(index),
                Intent::GraySubtle,
            )
            .disabled(index == 0),
            Node::button(
                "⬇️",
                UiEvent::MoveEntryDown(index),
                Intent::GraySubtle,
            )
            .disabled(index == total - 1),
            Node::button(
                "❌",
                UiEvent::RemoveEntry(entry.media_id),
                Intent::AlertSubtle,
            ),
        ],
    );

    Node::container(
        "relative",
        vec![
            // Full-row hit target opening the entry's detail view.
            Node::button(" ", UiEvent::OpenEntry(entry.media_id), Intent::GraySubtle)
                .class("absolute inset-0 w-full h-full z-10 bg-transparent hover:bg-white/5 border-none cursor-pointer"),
            Node::container(
                "flex items-center gap-4 p-2 border-b border-gray-700",
                vec![
                    Node::text(
                        (index + 1).to_string(),
                        "text-2xl font-bold text-gray-400 w-8 text-center",
                    ),
                    Node::image(
                        entry.cover_image.clone(),
                        "w-[60px] h-[84px] rounded bg-cover bg-center",
                    ),
                    Node::text(entry.title.clone(), "flex-grow font-semibold"),
                    controls,
                ],
            ),
        ],
    )
}

fn clear_confirmation() -> Node {
    Node::container(
        "absolute inset-0 bg-black bg-opacity-75 flex flex-col items-center justify-center z-50 p-4",
        vec![Node::container(
            "bg-gray-800 p-6 rounded-lg shadow-xl text-center",
            vec![
                Node::text("Are you sure?", "text-xl font-bold mb-2"),
                Node::text(
                    "This will permanently delete your entire watch order list.",
                    "mb-6",
                ),
                Node::container(
                    "flex gap-4 justify-center",
                    vec![
                        Node::button(
                            "Cancel",
                            UiEvent::CancelClearQueue,
                            Intent::GraySubtle,
                        ),
                        Node::button(
                            "Yes, Remove All",
                            UiEvent::ConfirmClearQueue,
                            Intent::Alert,
                        ),
                    ],
                ),
            ],
        )],
    )
}
