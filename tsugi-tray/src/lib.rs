//! tsugi tray surface
//!
//! This crate contains the watch-next tray surface: the view state
//! machine, the Elm-style message/update loop, and the pure view
//! functions that turn state into the declarative [`tree::Node`] the
//! host renders. A thin tokio runtime ([`runtime::TraySurface`])
//! executes the surface's two asynchronous effects, the collection
//! fetch and the filter debounce.
//!
//! Notes
//! - The host brings the renderer, storage, the list service, toasts,
//!   and navigation; they arrive through the `tsugi-core` ports.
//! - Public items are exposed mainly to enable testing and embedding.

pub mod messages;
pub mod options;
pub mod reactive;
pub mod runtime;
pub mod state;
pub mod tree;
pub mod update;
pub mod views;

pub use messages::{Message, UiEvent};
pub use options::SurfaceOptions;
pub use runtime::TraySurface;
pub use state::{TrayState, TrayView};
pub use tree::{Intent, Node, Selector, TextField, ToggleId};
pub use update::{Effect, TrayApp};
