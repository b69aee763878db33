//! Tabpage API.
//!
//! Tabpage handle `0` means the current tabpage.

use xeno_win_config::{BufferId, TabpageId, WinConfig, WindowId};

use super::{Result, WindowLayout};
use crate::error::WindowError;
use crate::hooks::WindowHooks;
use crate::tabpage::Tabpage;
use crate::ui::RedrawRegion;
use crate::window::Window;

impl WindowLayout {
	/// Tabpage handles in display order.
	pub fn list_tabpages(&self) -> Vec<TabpageId> {
		self.tabpages.iter().map(|t| t.id).collect()
	}

	/// Opens a tabpage after the current one with a single window showing
	/// `buffer`, and makes it current.
	pub fn new_tabpage(&mut self, buffer: BufferId) -> TabpageId {
		let buffer = if buffer.is_current() { self.current_buffer() } else { buffer };
		let id = TabpageId(self.next_tabpage);
		self.next_tabpage += 1;
		let window = self.peek_window_id();
		self.commit_window_id();

		let (width, height) = self.grid_size();
		let config = WinConfig {
			width,
			height,
			..WinConfig::default()
		};
		self.windows.insert(window, Window::new(window, buffer, id, config));
		let index = self
			.tabpages
			.iter()
			.position(|t| t.id == self.current_tab)
			.map_or(self.tabpages.len(), |i| i + 1);
		self.tabpages.insert(index, Tabpage::new(id, window, width, height));
		self.switch_tabpage(id);
		self.notify(window, RedrawRegion::Layout);
		tracing::debug!(tabpage = ?id, ?window, "tabpage opened");
		id
	}

	/// Makes `tabpage` current.
	pub fn set_current_tabpage(&mut self, tabpage: TabpageId) -> Result<()> {
		let tab = self.resolve_tabpage(tabpage)?;
		self.switch_tabpage(tab);
		let curwin = self.current_window();
		self.notify(curwin, RedrawRegion::Layout);
		Ok(())
	}

	/// Windows of `tabpage`: in-tree windows in layout order, then floats.
	pub fn tabpage_list_wins(&self, tabpage: TabpageId) -> Result<Vec<WindowId>> {
		let tab = self.resolve_tabpage(tabpage)?;
		Ok(self.tab(tab).windows())
	}

	/// Current window of `tabpage`.
	pub fn tabpage_get_win(&self, tabpage: TabpageId) -> Result<WindowId> {
		let tab = self.resolve_tabpage(tabpage)?;
		let curwin = self.tab(tab).curwin;
		if !self.is_valid_window(curwin) {
			panic!("tabpage {tab} has no current window");
		}
		Ok(curwin)
	}

	/// Makes `window` the current window of `tabpage`.
	///
	/// For the current tabpage this enters the window.
	pub fn tabpage_set_win(&mut self, tabpage: TabpageId, window: WindowId, hooks: &mut dyn WindowHooks) -> Result<()> {
		let tab = self.resolve_tabpage(tabpage)?;
		let win = self.resolve_window(window)?;
		if !self.tab(tab).contains(win) {
			return Err(WindowError::WindowNotInTabpage(tab));
		}
		if tab == self.current_tab {
			self.enter(win, hooks, false);
		} else {
			let page = self.tab_mut(tab);
			if page.curwin != win {
				page.prevwin = Some(page.curwin);
				page.curwin = win;
			}
		}
		Ok(())
	}

	/// One-based position of `tabpage`.
	pub fn tabpage_get_number(&self, tabpage: TabpageId) -> Result<usize> {
		let tab = self.resolve_tabpage(tabpage)?;
		self.tabpages
			.iter()
			.position(|t| t.id == tab)
			.map(|i| i + 1)
			.ok_or(WindowError::InvalidTabpage(tab))
	}

	/// Returns `true` if `tabpage` exists.
	pub fn tabpage_is_valid(&self, tabpage: TabpageId) -> bool {
		self.resolve_tabpage(tabpage).is_ok()
	}

	pub(crate) fn resolve_tabpage(&self, id: TabpageId) -> Result<TabpageId> {
		let id = if id.is_current() { self.current_tab } else { id };
		match self.tabpage(id) {
			Some(_) => Ok(id),
			None => Err(WindowError::InvalidTabpage(id)),
		}
	}
}
