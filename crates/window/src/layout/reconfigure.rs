//! Changing the placement of an existing window.
//!
//! A reconfigure either updates the window in place (float geometry, split
//! size) or moves it: out of the frame tree into the float list, back into
//! the tree, or to another spot in the tree. Validation and every structural
//! precondition are checked before the first edit.

use xeno_win_config::{
	Placement, SplitDirection, TabpageId, ValidateMode, WinConfig, WinConfigRequest, WinStyle, WindowId, validate,
};

use super::{Result, WindowLayout};
use crate::error::StructuralError;
use crate::hooks::NoHooks;
use crate::ui::RedrawRegion;

/// A split update that names neither `vertical` nor `split` only resizes.
fn resize_in_place(has_split: bool, has_vertical: bool) -> bool {
	!has_vertical && !has_split
}

/// A window already in the tree keeps its spot when no anchor window is
/// named and the resolved side is the one it already occupies.
fn keeps_split_side(
	was_split: bool,
	has_win: bool,
	has_split: bool,
	has_vertical: bool,
	old_split: Option<SplitDirection>,
	new_split: SplitDirection,
) -> bool {
	was_split && !has_win && ((!has_split && !has_vertical) || old_split == Some(new_split))
}

impl WindowLayout {
	/// Reconfigures `window` (`WindowId::CURRENT` for the current window).
	///
	/// Fields absent from `request` keep their current values. Nothing is
	/// changed when the request is rejected.
	pub fn set_config(&mut self, window: WindowId, request: &WinConfigRequest) -> Result<()> {
		let win = self.resolve_window(window)?;
		let (tab, baseline) = {
			let w = self.win(win);
			(w.tabpage, w.config.clone())
		};
		let was_split = baseline.is_split();
		let old_split = self.tab(tab).frames.split_dir(win);
		let config = validate(request, &self.validate_context(&baseline, ValidateMode::Reconfigure, old_split))?;
		let minimal = request.style.is_some() && config.style == WinStyle::Minimal;

		match config.placement {
			Placement::Split { direction, target } => {
				let parent = self.split_parent(target)?;
				let has_split = request.split.is_some();
				let has_vertical = request.vertical.is_some();
				if resize_in_place(has_split, has_vertical)
					|| keeps_split_side(was_split, request.win.is_some(), has_split, has_vertical, old_split, direction)
				{
					tracing::trace!(window = ?win, ?direction, "split resized in place");
					self.win_mut(win).config = config;
					self.resize_requested(win, tab, request);
					self.notify(win, RedrawRegion::Window);
				} else {
					self.move_into_tree(win, tab, &baseline, parent, direction, config)?;
					self.resize_requested(win, self.win(win).tabpage, request);
					self.notify(win, RedrawRegion::Layout);
				}
			}
			Placement::Float(_) | Placement::External if was_split => {
				self.check_float_anchor(&config)?;
				let page = self.tab_mut(tab);
				if page.frames.len() == 1 {
					return Err(StructuralError::LastWindowFloat.into());
				}
				let side = page.frames.detach(win);
				let dest = if config.is_external() { self.current_tab } else { tab };
				self.tab_mut(dest).floats.push(win);
				if dest != tab {
					self.leave_tabpage(win, tab, dest);
				}
				tracing::debug!(window = ?win, ?side, external = config.is_external(), "split window made floating");
				self.win_mut(win).config = config;
				self.notify(win, RedrawRegion::Layout);
			}
			Placement::Float(_) | Placement::External => {
				self.check_float_anchor(&config)?;
				let region = if baseline.is_external() == config.is_external() {
					RedrawRegion::Window
				} else {
					RedrawRegion::Layout
				};
				let dest = self.current_tab;
				if config.is_external() && tab != dest {
					self.tab_mut(tab).remove_float(win);
					self.tab_mut(dest).floats.push(win);
					self.leave_tabpage(win, tab, dest);
				}
				self.win_mut(win).config = config;
				self.notify(win, region);
			}
		}

		if minimal {
			self.win_mut(win).options.apply_minimal();
		}
		Ok(())
	}

	/// Parses `request` from a dictionary value and reconfigures `window`.
	pub fn set_config_value(&mut self, window: WindowId, request: &serde_json::Value) -> Result<()> {
		let request = WinConfigRequest::from_value(request)?;
		self.set_config(window, &request)
	}

	/// Applies a grid size requested by a UI.
	///
	/// Floats take the size as their new config size; in-tree windows are
	/// resized in the frame tree. Non-positive values mean "no request".
	pub fn resize_grid(&mut self, window: WindowId, width: i64, height: i64) -> Result<()> {
		let win = self.resolve_window(window)?;
		let width = u32::try_from(width).ok().filter(|w| *w > 0);
		let height = u32::try_from(height).ok().filter(|h| *h > 0);
		let tab = self.win(win).tabpage;
		if self.win(win).is_floating() {
			let config = &mut self.win_mut(win).config;
			let before = (config.width, config.height);
			config.width = width.unwrap_or(config.width);
			config.height = height.unwrap_or(config.height);
			if (config.width, config.height) != before {
				self.notify(win, RedrawRegion::Window);
			}
		} else if self.tab_mut(tab).frames.resize(win, width, height) {
			self.sync_split_size(win);
			self.notify(win, RedrawRegion::Layout);
		}
		Ok(())
	}

	/// Moves `win` next to `parent` (or to the edge of the current tabpage).
	fn move_into_tree(
		&mut self,
		win: WindowId,
		tab: TabpageId,
		baseline: &WinConfig,
		parent: Option<WindowId>,
		direction: SplitDirection,
		config: WinConfig,
	) -> Result<()> {
		let was_split = baseline.is_split();
		if was_split && (self.tab(tab).frames.is_root(win) || parent == Some(win)) {
			return Err(StructuralError::SplitIntoItself.into());
		}
		let dest = self.split_tabpage(parent);
		self.tab(dest).frames.can_split(parent, direction)?;

		if was_split {
			let side = self.tab_mut(tab).frames.detach(win);
			tracing::debug!(window = ?win, ?side, "split window detached");
		} else {
			self.tab_mut(tab).remove_float(win);
			self.notify_remove_grid(win);
			if baseline.is_external() {
				let current = self.current_tab;
				for page in self.tabpages.iter_mut().filter(|p| p.id != current && p.curwin == win) {
					page.curwin = page.frames.first_window();
					tracing::debug!(tabpage = ?page.id, curwin = ?page.curwin, "tabpage current window repaired");
				}
			}
		}

		let was_current = self.current_tab == tab && self.tab(tab).curwin == win;
		if dest != tab {
			self.leave_tabpage(win, tab, dest);
		}

		self.tab_mut(dest).frames.split_insert(parent, direction, win)?;
		self.win_mut(win).config = config;
		tracing::debug!(window = ?win, ?parent, ?direction, tabpage = ?dest, "window inserted into frame tree");
		if dest != tab && was_current {
			self.enter(win, &mut NoHooks, true);
		}
		Ok(())
	}

	/// Hands `win` over from tabpage `from` to `to`, pointing `from`'s current
	/// and previous windows away from it.
	fn leave_tabpage(&mut self, win: WindowId, from: TabpageId, to: TabpageId) {
		let page = self.tab_mut(from);
		if page.curwin == win {
			page.curwin = page.frames.first_window();
		}
		if page.prevwin == Some(win) {
			page.prevwin = None;
		}
		let curwin = page.curwin;
		self.win_mut(win).tabpage = to;
		tracing::debug!(window = ?win, ?from, ?to, ?curwin, "window moved between tabpages");
	}

	fn resize_requested(&mut self, win: WindowId, tab: TabpageId, request: &WinConfigRequest) {
		let config = &self.win(win).config;
		let width = request.width.map(|_| config.width);
		let height = request.height.map(|_| config.height);
		self.tab_mut(tab).frames.resize(win, width, height);
		self.sync_split_size(win);
	}
}
