//! Event hooks fired while windows are opened and entered.
//!
//! Hooks receive the layout mutably and may close or rearrange windows,
//! including the one being opened. Callers re-check liveness after every
//! hook invocation.

use xeno_win_config::WindowId;

use crate::layout::WindowLayout;

/// Receiver of window lifecycle events.
///
/// Every method defaults to a no-op.
pub trait WindowHooks {
	/// A window became the current window.
	fn win_enter(&mut self, _layout: &mut WindowLayout, _window: WindowId) {}

	/// A buffer was attached to a window.
	fn buf_win_enter(&mut self, _layout: &mut WindowLayout, _window: WindowId) {}

	/// A new window finished opening.
	fn win_new(&mut self, _layout: &mut WindowLayout, _window: WindowId) {}
}

/// Hooks that do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl WindowHooks for NoHooks {}
