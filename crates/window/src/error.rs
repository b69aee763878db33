//! Error types for window layout operations.

use thiserror::Error;
use xeno_win_config::{RequestError, TabpageId, ValidationError, WindowId};

/// Tree-level failures detected before any structural edit is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
	/// The window is the whole tree of its tabpage, or the split target is the window itself.
	#[error("Cannot split window into itself")]
	SplitIntoItself,
	/// The split target is a floating or external window.
	#[error("Cannot split a floating window")]
	SplitFloating,
	/// Turning the only in-tree window of a tabpage into a float.
	#[error("Cannot change last window into float")]
	LastWindowFloat,
	/// The split target is too small to be divided.
	#[error("Not enough room")]
	NotEnoughRoom,
	/// The split target or anchor window does not exist.
	#[error("Invalid window id: {0}")]
	InvalidAnchorWindow(WindowId),
}

/// Errors returned by [`crate::WindowLayout`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
	/// The request violates a placement rule.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// The request dictionary is malformed.
	#[error(transparent)]
	Request(#[from] RequestError),
	/// The requested structural edit is impossible.
	#[error(transparent)]
	Structural(#[from] StructuralError),
	/// An event hook closed the window while it was being opened.
	#[error("Window was closed immediately")]
	ClosedImmediately(WindowId),
	/// No window with this handle exists.
	#[error("Invalid window id: {0}")]
	InvalidWindow(WindowId),
	/// No tabpage with this handle exists.
	#[error("Invalid tabpage id: {0}")]
	InvalidTabpage(TabpageId),
	/// The window lives in a different tabpage.
	#[error("Window does not belong to tabpage {0}")]
	WindowNotInTabpage(TabpageId),
	/// Closing would leave the editor without any in-tree window.
	#[error("Cannot close last window")]
	CloseLastWindow,
}
