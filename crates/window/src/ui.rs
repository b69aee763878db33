//! Attached UI registry and the redraw notification seam.
//!
//! Capabilities are the intersection of what every attached UI supports:
//! an extension is active only when all UIs enable it, and nothing is active
//! while no UI is attached. The editor grid is the smallest attached screen.

use std::cell::RefCell;
use std::rc::Rc;

use xeno_win_config::{UiCapabilities, WindowId};

bitflags::bitflags! {
	/// Optional UI protocol extensions.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct UiExtensions: u16 {
		/// Externalized command line.
		const CMDLINE = 1 << 0;
		/// Externalized popup menu.
		const POPUPMENU = 1 << 1;
		/// Externalized tabline.
		const TABLINE = 1 << 2;
		/// Externalized wildmenu.
		const WILDMENU = 1 << 3;
		/// Externalized messages.
		const MESSAGES = 1 << 4;
		/// Line-based grid events.
		const LINEGRID = 1 << 5;
		/// One grid per window; required for external windows.
		const MULTIGRID = 1 << 6;
		/// Semantic highlight state.
		const HLSTATE = 1 << 7;
		/// Terminal color options.
		const TERMCOLORS = 1 << 8;
		/// Floats on separate grids without the rest of multigrid.
		const FLOAT_DEBUG = 1 << 9;
	}
}

impl UiExtensions {
	/// Looks up an extension by its protocol name, with or without the `ext_` prefix.
	pub fn from_protocol_name(name: &str) -> Option<Self> {
		let name = name.strip_prefix("ext_").unwrap_or(name);
		Some(match name {
			"cmdline" => Self::CMDLINE,
			"popupmenu" => Self::POPUPMENU,
			"tabline" => Self::TABLINE,
			"wildmenu" => Self::WILDMENU,
			"messages" => Self::MESSAGES,
			"linegrid" => Self::LINEGRID,
			"multigrid" => Self::MULTIGRID,
			"hlstate" => Self::HLSTATE,
			"termcolors" => Self::TERMCOLORS,
			"float_debug" => Self::FLOAT_DEBUG,
			_ => return None,
		})
	}
}

/// Identifier of an attached UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UiId(pub u64);

/// What a UI announced when attaching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiAttachment {
	/// Enabled extensions.
	pub extensions: UiExtensions,
	/// Screen width in cells.
	pub width: u16,
	/// Screen height in cells.
	pub height: u16,
}

/// Set of attached UIs.
#[derive(Debug, Default)]
pub struct UiRegistry {
	uis: Vec<(UiId, UiAttachment)>,
	active: UiExtensions,
}

impl UiRegistry {
	/// Attaches or re-attaches a UI and recomputes the active extensions.
	///
	/// `MULTIGRID` implies `LINEGRID`.
	pub fn attach(&mut self, id: UiId, mut attachment: UiAttachment) {
		if attachment.extensions.contains(UiExtensions::MULTIGRID) {
			attachment.extensions |= UiExtensions::LINEGRID;
		}
		match self.uis.iter_mut().find(|(ui, _)| *ui == id) {
			Some((_, slot)) => *slot = attachment,
			None => self.uis.push((id, attachment)),
		}
		self.refresh();
		tracing::debug!(?id, extensions = ?attachment.extensions, "ui attached");
	}

	/// Detaches a UI. Returns `false` if it was not attached.
	pub fn detach(&mut self, id: UiId) -> bool {
		let before = self.uis.len();
		self.uis.retain(|(ui, _)| *ui != id);
		let removed = self.uis.len() != before;
		if removed {
			self.refresh();
			tracing::debug!(?id, "ui detached");
		}
		removed
	}

	/// Returns `true` if every attached UI enables all of `ext`.
	pub fn has(&self, ext: UiExtensions) -> bool {
		!ext.is_empty() && self.active.contains(ext)
	}

	/// Number of attached UIs.
	pub fn len(&self) -> usize {
		self.uis.len()
	}

	/// Returns `true` if no UI is attached.
	pub fn is_empty(&self) -> bool {
		self.uis.is_empty()
	}

	/// Capabilities consulted by request validation.
	pub fn capabilities(&self) -> UiCapabilities {
		UiCapabilities {
			external_windows: self.has(UiExtensions::MULTIGRID),
		}
	}

	/// Smallest screen among the attached UIs.
	pub fn screen_size(&self) -> Option<(u16, u16)> {
		self.uis.iter().map(|(_, ui)| (ui.width, ui.height)).reduce(|a, b| (a.0.min(b.0), a.1.min(b.1)))
	}

	fn refresh(&mut self) {
		self.active = match self.uis.split_first() {
			Some(((_, first), rest)) => rest.iter().fold(first.extensions, |acc, (_, ui)| acc & ui.extensions),
			None => UiExtensions::empty(),
		};
	}
}

/// Screen area a redraw request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawRegion {
	/// Only the window's own grid.
	Window,
	/// The whole layout of the window's tabpage.
	Layout,
}

/// Notification sent to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
	/// A region needs redrawing.
	Redraw(WindowId, RedrawRegion),
	/// The window's separate grid is gone.
	RemoveGrid(WindowId),
}

/// Receiver of layout change notifications.
///
/// Calls are fire-and-forget; implementations may queue them.
pub trait UiNotifier {
	/// Requests a redraw of `region` for `window`.
	fn request_redraw(&mut self, window: WindowId, region: RedrawRegion);

	/// Unregisters the separate grid of a window leaving float placement.
	fn remove_grid(&mut self, window: WindowId);
}

/// Notifier that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl UiNotifier for NullNotifier {
	fn request_redraw(&mut self, _window: WindowId, _region: RedrawRegion) {}

	fn remove_grid(&mut self, _window: WindowId) {}
}

/// Notifier that records events into a shared log.
///
/// Clones share the same log, so a clone can be handed to the layout while
/// the original is kept for inspection.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
	events: Rc<RefCell<Vec<UiEvent>>>,
}

impl EventLog {
	/// Takes all recorded events.
	pub fn take(&self) -> Vec<UiEvent> {
		std::mem::take(&mut *self.events.borrow_mut())
	}
}

impl UiNotifier for EventLog {
	fn request_redraw(&mut self, window: WindowId, region: RedrawRegion) {
		self.events.borrow_mut().push(UiEvent::Redraw(window, region));
	}

	fn remove_grid(&mut self, window: WindowId) {
		self.events.borrow_mut().push(UiEvent::RemoveGrid(window));
	}
}
