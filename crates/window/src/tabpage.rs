//! Tabpages: one frame tree plus the floats shown above it.

use xeno_win_config::{TabpageId, WindowId};

use crate::frame::FrameTree;

/// A tabpage.
pub struct Tabpage {
	pub(crate) id: TabpageId,
	pub(crate) frames: FrameTree,
	/// Floating and external windows, in creation order.
	pub(crate) floats: Vec<WindowId>,
	/// Window that becomes current when the tabpage is entered.
	///
	/// May name an external window that moved to another tabpage; it is
	/// repaired before that window changes shape.
	pub(crate) curwin: WindowId,
	pub(crate) prevwin: Option<WindowId>,
}

impl Tabpage {
	pub(crate) fn new(id: TabpageId, window: WindowId, width: u32, height: u32) -> Self {
		Self {
			id,
			frames: FrameTree::new(window, width, height),
			floats: Vec::new(),
			curwin: window,
			prevwin: None,
		}
	}

	/// Tabpage handle.
	pub fn id(&self) -> TabpageId {
		self.id
	}

	/// Frame tree of the in-tree windows.
	pub fn frames(&self) -> &FrameTree {
		&self.frames
	}

	/// Floating and external windows.
	pub fn floats(&self) -> &[WindowId] {
		&self.floats
	}

	/// Window current in this tabpage.
	pub fn curwin(&self) -> WindowId {
		self.curwin
	}

	/// In-tree windows in layout order, followed by floats.
	pub fn windows(&self) -> Vec<WindowId> {
		let mut out = self.frames.windows();
		out.extend_from_slice(&self.floats);
		out
	}

	/// Returns `true` if `window` is in the tree or among the floats.
	pub fn contains(&self, window: WindowId) -> bool {
		self.frames.contains(window) || self.floats.contains(&window)
	}

	/// Top-left in-tree window.
	pub fn first_window(&self) -> WindowId {
		self.frames.first_window()
	}

	pub(crate) fn remove_float(&mut self, window: WindowId) -> bool {
		let before = self.floats.len();
		self.floats.retain(|w| *w != window);
		self.floats.len() != before
	}
}
