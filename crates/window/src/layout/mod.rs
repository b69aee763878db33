//! Window layout state and placement transitions.
//!
//! [`WindowLayout`] owns every window, every tabpage and its frame tree, the
//! attached UI registry and the redraw notifier. Placement changes go through
//! validation first and are applied only when the whole request is valid.
//!
//! # Modules
//!
//! - `open` - Opening windows
//! - `reconfigure` - Changing the placement of an existing window
//! - `query` - Projecting a window's placement back into a request
//! - `close` - Closing windows and tabpages
//! - `tabpages` - Tabpage API

mod close;
mod open;
mod query;
mod reconfigure;
mod tabpages;

#[cfg(test)]
mod invariants;

use rustc_hash::FxHashMap;
use xeno_win_config::{
	BufferId, FloatPlacement, LayoutOptions, Placement, Relative, SplitDirection, SplitTarget, TabpageId, ValidateContext, ValidateMode,
	WinConfig, WindowId,
};

use crate::error::{StructuralError, WindowError};
use crate::hooks::WindowHooks;
use crate::tabpage::Tabpage;
use crate::ui::{NullNotifier, RedrawRegion, UiAttachment, UiExtensions, UiId, UiNotifier, UiRegistry};
use crate::window::Window;

/// Handle of the first window; lower values are never allocated.
pub const FIRST_WINDOW: u32 = 1000;

pub(crate) type Result<T> = std::result::Result<T, WindowError>;

/// All windows and tabpages of an editor instance.
pub struct WindowLayout {
	windows: FxHashMap<WindowId, Window>,
	/// Tabpages in display order.
	tabpages: Vec<Tabpage>,
	current_tab: TabpageId,
	next_window: u32,
	next_tabpage: u32,
	options: LayoutOptions,
	ui: UiRegistry,
	notifier: Box<dyn UiNotifier>,
}

impl WindowLayout {
	/// Creates a layout with one tabpage holding one window that shows `buffer`.
	pub fn new(options: LayoutOptions, buffer: BufferId) -> Self {
		let tab = TabpageId(1);
		let window = WindowId(FIRST_WINDOW);
		let (width, height) = (u32::from(options.columns), u32::from(options.lines));
		let config = WinConfig {
			width,
			height,
			..WinConfig::default()
		};
		let mut windows = FxHashMap::default();
		windows.insert(window, Window::new(window, buffer, tab, config));
		Self {
			windows,
			tabpages: vec![Tabpage::new(tab, window, width, height)],
			current_tab: tab,
			next_window: FIRST_WINDOW + 1,
			next_tabpage: 2,
			options,
			ui: UiRegistry::default(),
			notifier: Box::new(NullNotifier),
		}
	}

	/// Replaces the redraw notifier.
	pub fn with_notifier(mut self, notifier: impl UiNotifier + 'static) -> Self {
		self.notifier = Box::new(notifier);
		self
	}

	/// Global layout options.
	pub fn options(&self) -> &LayoutOptions {
		&self.options
	}

	/// Mutable access to the global layout options.
	pub fn options_mut(&mut self) -> &mut LayoutOptions {
		&mut self.options
	}

	/// Attached UIs.
	pub fn ui(&self) -> &UiRegistry {
		&self.ui
	}

	/// Attaches a UI.
	pub fn attach_ui(&mut self, id: UiId, attachment: UiAttachment) {
		self.ui.attach(id, attachment);
	}

	/// Detaches a UI. Returns `false` if it was not attached.
	pub fn detach_ui(&mut self, id: UiId) -> bool {
		self.ui.detach(id)
	}

	/// Returns `true` if every attached UI supports `ext`.
	pub fn ui_has(&self, ext: UiExtensions) -> bool {
		self.ui.has(ext)
	}

	/// The current window.
	pub fn current_window(&self) -> WindowId {
		self.tab(self.current_tab).curwin
	}

	/// The current tabpage.
	pub fn current_tabpage(&self) -> TabpageId {
		self.current_tab
	}

	/// Buffer of the current window.
	pub fn current_buffer(&self) -> BufferId {
		self.win(self.current_window()).buffer
	}

	/// Looks up a window.
	pub fn window(&self, id: WindowId) -> Option<&Window> {
		self.windows.get(&id)
	}

	/// Looks up a window mutably.
	pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
		self.windows.get_mut(&id)
	}

	/// Returns `true` if the window exists in any tabpage.
	pub fn is_valid_window(&self, id: WindowId) -> bool {
		self.windows.contains_key(&id)
	}

	/// Number of live windows across all tabpages.
	pub fn window_count(&self) -> usize {
		self.windows.len()
	}

	/// Looks up a tabpage.
	pub fn tabpage(&self, id: TabpageId) -> Option<&Tabpage> {
		self.tabpages.iter().find(|t| t.id == id)
	}

	/// Makes `window` current, switching tabpage if needed.
	pub fn set_current_window(&mut self, window: WindowId, hooks: &mut dyn WindowHooks) -> Result<()> {
		let window = self.resolve_window(window)?;
		self.enter(window, hooks, false);
		Ok(())
	}

	pub(crate) fn resolve_window(&self, id: WindowId) -> Result<WindowId> {
		let id = if id.is_current() { self.current_window() } else { id };
		if self.windows.contains_key(&id) {
			Ok(id)
		} else {
			Err(WindowError::InvalidWindow(id))
		}
	}

	pub(crate) fn win(&self, id: WindowId) -> &Window {
		match self.windows.get(&id) {
			Some(window) => window,
			None => panic!("window {id} is referenced by layout state but not registered"),
		}
	}

	pub(crate) fn win_mut(&mut self, id: WindowId) -> &mut Window {
		match self.windows.get_mut(&id) {
			Some(window) => window,
			None => panic!("window {id} is referenced by layout state but not registered"),
		}
	}

	pub(crate) fn tab(&self, id: TabpageId) -> &Tabpage {
		match self.tabpage(id) {
			Some(tab) => tab,
			None => panic!("tabpage {id} is referenced by layout state but not registered"),
		}
	}

	pub(crate) fn tab_mut(&mut self, id: TabpageId) -> &mut Tabpage {
		match self.tabpages.iter_mut().find(|t| t.id == id) {
			Some(tab) => tab,
			None => panic!("tabpage {id} is referenced by layout state but not registered"),
		}
	}

	pub(crate) fn validate_context<'a>(
		&'a self,
		baseline: &'a WinConfig,
		mode: ValidateMode,
		current_split: Option<SplitDirection>,
	) -> ValidateContext<'a> {
		ValidateContext {
			baseline,
			mode,
			current_window: self.current_window(),
			current_split,
			options: &self.options,
			capabilities: self.ui.capabilities(),
		}
	}

	/// Handle the next allocated window will get.
	pub(crate) fn peek_window_id(&self) -> WindowId {
		WindowId(self.next_window)
	}

	pub(crate) fn commit_window_id(&mut self) {
		self.next_window += 1;
	}

	/// Resolves the window a split is inserted next to; `None` for a top-level split.
	pub(crate) fn split_parent(&self, target: SplitTarget) -> Result<Option<WindowId>> {
		let SplitTarget::Window(id) = target else {
			return Ok(None);
		};
		let id = self.resolve_window(id)?;
		if self.win(id).is_floating() {
			return Err(StructuralError::SplitFloating.into());
		}
		Ok(Some(id))
	}

	/// Tabpage a split lands in: the parent's, or the current one for top-level splits.
	pub(crate) fn split_tabpage(&self, parent: Option<WindowId>) -> TabpageId {
		parent.map_or(self.current_tab, |p| self.win(p).tabpage)
	}

	/// Checks that a window-relative float is anchored to a live window.
	pub(crate) fn check_float_anchor(&self, config: &WinConfig) -> Result<()> {
		if let Placement::Float(FloatPlacement {
			relative: Relative::Window(anchor),
			..
		}) = config.placement
		{
			if !self.windows.contains_key(&anchor) {
				return Err(WindowError::InvalidWindow(anchor));
			}
		}
		Ok(())
	}

	/// Copies the frame size of an in-tree window into its config.
	pub(crate) fn sync_split_size(&mut self, id: WindowId) {
		let tab = self.win(id).tabpage;
		if let Some((width, height)) = self.tab(tab).frames.window_size(id) {
			let config = &mut self.win_mut(id).config;
			config.width = width;
			config.height = height;
		}
	}

	/// Makes `window` current.
	pub(crate) fn enter(&mut self, window: WindowId, hooks: &mut dyn WindowHooks, noautocmd: bool) {
		let tab = self.win(window).tabpage;
		if tab != self.current_tab {
			self.switch_tabpage(tab);
		}
		let page = self.tab_mut(tab);
		if page.curwin != window {
			page.prevwin = Some(page.curwin);
			page.curwin = window;
		}
		tracing::trace!(?window, ?tab, noautocmd, "window entered");
		if !noautocmd {
			hooks.win_enter(self, window);
		}
	}

	/// Makes `to` the current tabpage. External windows follow the current tabpage.
	pub(crate) fn switch_tabpage(&mut self, to: TabpageId) {
		let from = self.current_tab;
		if from == to {
			return;
		}
		let external: Vec<WindowId> = self
			.tab(from)
			.floats
			.iter()
			.copied()
			.filter(|w| self.win(*w).config.is_external())
			.collect();
		for window in &external {
			self.tab_mut(from).remove_float(*window);
			self.tab_mut(to).floats.push(*window);
			self.win_mut(*window).tabpage = to;
		}
		self.current_tab = to;
		tracing::debug!(?from, ?to, moved = external.len(), "tabpage switched");
	}

	pub(crate) fn grid_size(&self) -> (u32, u32) {
		let (columns, lines) = self.ui.screen_size().unwrap_or((self.options.columns, self.options.lines));
		(u32::from(columns), u32::from(lines))
	}

	pub(crate) fn notify(&mut self, window: WindowId, region: RedrawRegion) {
		self.notifier.request_redraw(window, region);
	}

	pub(crate) fn notify_remove_grid(&mut self, window: WindowId) {
		self.notifier.remove_grid(window);
	}
}
