//! Closing windows and tabpages.

use xeno_win_config::{TabpageId, WindowId};

use super::{Result, WindowLayout};
use crate::error::WindowError;
use crate::ui::RedrawRegion;

impl WindowLayout {
	/// Closes `window` (`WindowId::CURRENT` for the current window).
	///
	/// Closing the last in-tree window of a tabpage closes the tabpage with
	/// its floats. The last in-tree window of the editor cannot be closed.
	pub fn close_window(&mut self, window: WindowId) -> Result<()> {
		let win = self.resolve_window(window)?;
		let tab = self.win(win).tabpage;
		let is_split = self.win(win).config.is_split();

		if is_split && self.tab(tab).frames.len() == 1 {
			if self.tabpages.len() == 1 {
				return Err(WindowError::CloseLastWindow);
			}
			self.close_tabpage(tab);
			return Ok(());
		}

		if is_split {
			self.tab_mut(tab).frames.detach(win);
		} else {
			self.tab_mut(tab).remove_float(win);
			self.notify_remove_grid(win);
		}
		self.windows.remove(&win);
		self.repair_current_windows(win);
		let curwin = self.tab(tab).curwin;
		self.notify(curwin, RedrawRegion::Layout);
		tracing::debug!(window = ?win, ?tab, "window closed");
		Ok(())
	}

	/// Removes a tabpage and every window it holds.
	fn close_tabpage(&mut self, tab: TabpageId) {
		let Some(index) = self.tabpages.iter().position(|t| t.id == tab) else {
			return;
		};
		if self.current_tab == tab {
			let next = if index + 1 < self.tabpages.len() { index + 1 } else { index - 1 };
			let next = self.tabpages[next].id;
			self.switch_tabpage(next);
		}
		let page = self.tabpages.remove(index);
		let closed = page.windows();
		for win in &closed {
			if self.windows.remove(win).is_some() && page.floats.contains(win) {
				self.notify_remove_grid(*win);
			}
		}
		for win in &closed {
			self.repair_current_windows(*win);
		}
		let curwin = self.current_window();
		self.notify(curwin, RedrawRegion::Layout);
		tracing::debug!(?tab, windows = closed.len(), "tabpage closed");
	}

	/// Points every tabpage that tracked `closed` at a live window.
	fn repair_current_windows(&mut self, closed: WindowId) {
		for page in &mut self.tabpages {
			if page.curwin == closed {
				page.curwin = page.frames.first_window();
			}
			if page.prevwin == Some(closed) {
				page.prevwin = None;
			}
		}
	}
}
