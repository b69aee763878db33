//! Handle types for editor entities referenced by window configuration.
//!
//! Handles are plain integers at the request boundary. `0` always means
//! "the current one" and is never allocated to a live entity.

use std::fmt;

/// Unique identifier for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl WindowId {
	/// Placeholder handle resolving to the current window.
	pub const CURRENT: WindowId = WindowId(0);

	/// Returns `true` if this is the "current window" placeholder.
	pub fn is_current(self) -> bool {
		self.0 == 0
	}

	/// Converts a request-level integer into a concrete window handle.
	///
	/// Returns `None` for zero and negative values, which carry special
	/// meaning in requests (current window, top-level split).
	pub fn from_handle(handle: i64) -> Option<Self> {
		u32::try_from(handle).ok().filter(|h| *h > 0).map(WindowId)
	}

	/// Returns the integer handle used in requests and query results.
	pub fn handle(self) -> i64 {
		i64::from(self.0)
	}
}

impl fmt::Display for WindowId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Unique identifier for a tabpage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabpageId(pub u32);

impl TabpageId {
	/// Placeholder handle resolving to the current tabpage.
	pub const CURRENT: TabpageId = TabpageId(0);

	/// Returns `true` if this is the "current tabpage" placeholder.
	pub fn is_current(self) -> bool {
		self.0 == 0
	}
}

impl fmt::Display for TabpageId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Identifier for a buffer shown in a window.
///
/// Buffers are owned elsewhere; placement code only carries the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub u32);

impl BufferId {
	/// Placeholder handle resolving to the current buffer.
	pub const CURRENT: BufferId = BufferId(0);

	/// Returns `true` if this is the "current buffer" placeholder.
	pub fn is_current(self) -> bool {
		self.0 == 0
	}
}
