//! Window layout state: frame trees, tabpages, floats and placement transitions.
//!
//! Request parsing and validation live in `xeno-win-config`; this crate owns
//! the windows those requests act on and performs the structural edits a
//! placement change needs. Event hooks and the UI are reached through the
//! [`WindowHooks`] and [`UiNotifier`] seams.

/// Error types.
pub mod error;
/// Arena-backed frame tree of in-tree windows.
pub mod frame;
/// Window lifecycle event hooks.
pub mod hooks;
/// The layout engine.
pub mod layout;
/// Tabpages.
pub mod tabpage;
/// Attached UIs and redraw notifications.
pub mod ui;
/// Window records and display options.
pub mod window;

pub use error::{StructuralError, WindowError};
pub use frame::{Axis, FrameId, FrameTree};
pub use hooks::{NoHooks, WindowHooks};
pub use layout::{FIRST_WINDOW, WindowLayout};
pub use tabpage::Tabpage;
pub use ui::{EventLog, NullNotifier, RedrawRegion, UiAttachment, UiEvent, UiExtensions, UiId, UiNotifier, UiRegistry};
pub use window::{Window, WindowOptions};
pub use xeno_win_config as config;
